//! Durable backend over sea-orm.
//!
//! Every operation is a single statement (or a fetch-merge-write pair for
//! updates); there are no multi-statement transactions. Inserts and
//! updates go through sea-orm's insert/update-and-return, so the record
//! handed back is exactly the row that was persisted.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use migration::{Migrator, MigratorTrait};

use crate::budgets::{self, Budget, BudgetPatch, NewBudget};
use crate::categories::{self, Category, NewCategory};
use crate::goals::{self, Goal, GoalPatch, NewGoal};
use crate::transactions::{self, NewTransaction, Transaction, TransactionPatch};
use crate::{Patch, ResultStore, Storage, seed};

pub struct DatabaseStore {
    database: DatabaseConnection,
}

impl DatabaseStore {
    /// Connects, migrates, and seeds the default categories if the
    /// category table is empty.
    ///
    /// A seeding failure is logged and swallowed: the emptiness check
    /// runs again on the next cold start, so seeding heals itself.
    pub async fn connect(url: &str) -> ResultStore<Self> {
        let database = sea_orm::Database::connect(url).await?;
        Migrator::up(&database, None).await?;

        let store = Self { database };
        if let Err(err) = store.seed_default_categories().await {
            tracing::warn!("failed to seed default categories: {err}");
        }
        Ok(store)
    }

    async fn seed_default_categories(&self) -> ResultStore<()> {
        let existing = categories::Entity::find().count(&self.database).await?;
        if existing > 0 {
            return Ok(());
        }

        for new in seed::default_categories() {
            let record = Category::create(new);
            categories::ActiveModel::from(&record)
                .insert(&self.database)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for DatabaseStore {
    async fn transactions(&self) -> ResultStore<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .all(&self.database)
            .await?;
        models.into_iter().map(Transaction::try_from).collect()
    }

    async fn transaction(&self, id: &str) -> ResultStore<Option<Transaction>> {
        transactions::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Transaction::try_from)
            .transpose()
    }

    async fn create_transaction(&self, new: NewTransaction) -> ResultStore<Transaction> {
        let record = Transaction::create(new);
        let model = transactions::ActiveModel::from(&record)
            .insert(&self.database)
            .await?;
        Transaction::try_from(model)
    }

    async fn update_transaction(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> ResultStore<Option<Transaction>> {
        let Some(model) = transactions::Entity::find_by_id(id).one(&self.database).await? else {
            return Ok(None);
        };
        let mut record = Transaction::try_from(model)?;
        patch.apply(&mut record);

        match transactions::ActiveModel::from(&record)
            .update(&self.database)
            .await
        {
            Ok(model) => Ok(Some(Transaction::try_from(model)?)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_transaction(&self, id: &str) -> ResultStore<bool> {
        let result = transactions::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn categories(&self) -> ResultStore<Vec<Category>> {
        let models = categories::Entity::find().all(&self.database).await?;
        models.into_iter().map(Category::try_from).collect()
    }

    async fn category(&self, id: &str) -> ResultStore<Option<Category>> {
        categories::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Category::try_from)
            .transpose()
    }

    async fn create_category(&self, new: NewCategory) -> ResultStore<Category> {
        let record = Category::create(new);
        let model = categories::ActiveModel::from(&record)
            .insert(&self.database)
            .await?;
        Category::try_from(model)
    }

    async fn budgets(&self) -> ResultStore<Vec<Budget>> {
        let models = budgets::Entity::find().all(&self.database).await?;
        models.into_iter().map(Budget::try_from).collect()
    }

    async fn budgets_by_month(&self, month: &str) -> ResultStore<Vec<Budget>> {
        let models = budgets::Entity::find()
            .filter(budgets::Column::Month.eq(month))
            .all(&self.database)
            .await?;
        models.into_iter().map(Budget::try_from).collect()
    }

    async fn create_budget(&self, new: NewBudget) -> ResultStore<Budget> {
        let record = Budget::create(new);
        let model = budgets::ActiveModel::from(&record)
            .insert(&self.database)
            .await?;
        Budget::try_from(model)
    }

    async fn update_budget(&self, id: &str, patch: BudgetPatch) -> ResultStore<Option<Budget>> {
        let Some(model) = budgets::Entity::find_by_id(id).one(&self.database).await? else {
            return Ok(None);
        };
        let mut record = Budget::try_from(model)?;
        patch.apply(&mut record);

        match budgets::ActiveModel::from(&record).update(&self.database).await {
            Ok(model) => Ok(Some(Budget::try_from(model)?)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn goals(&self) -> ResultStore<Vec<Goal>> {
        let models = goals::Entity::find().all(&self.database).await?;
        models.into_iter().map(Goal::try_from).collect()
    }

    async fn goal(&self, id: &str) -> ResultStore<Option<Goal>> {
        goals::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Goal::try_from)
            .transpose()
    }

    async fn create_goal(&self, new: NewGoal) -> ResultStore<Goal> {
        let record = Goal::create(new);
        let model = goals::ActiveModel::from(&record)
            .insert(&self.database)
            .await?;
        Goal::try_from(model)
    }

    async fn update_goal(&self, id: &str, patch: GoalPatch) -> ResultStore<Option<Goal>> {
        let Some(model) = goals::Entity::find_by_id(id).one(&self.database).await? else {
            return Ok(None);
        };
        let mut record = Goal::try_from(model)?;
        patch.apply(&mut record);

        match goals::ActiveModel::from(&record).update(&self.database).await {
            Ok(model) => Ok(Some(Goal::try_from(model)?)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_goal(&self, id: &str) -> ResultStore<bool> {
        let result = goals::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
