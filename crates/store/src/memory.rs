//! Volatile backend: in-process maps, gone on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::budgets::{Budget, BudgetPatch, NewBudget};
use crate::categories::{Category, NewCategory};
use crate::goals::{Goal, GoalPatch, NewGoal};
use crate::transactions::{NewTransaction, Transaction, TransactionPatch};
use crate::{Patch, ResultStore, Storage, seed};

/// In-memory store. Each collection is guarded by its own lock and every
/// operation holds it for the whole operation, so concurrent callers see
/// whole operations, never partial writes.
pub struct MemoryStore {
    transactions: RwLock<HashMap<String, Transaction>>,
    categories: RwLock<HashMap<String, Category>>,
    budgets: RwLock<HashMap<String, Budget>>,
    goals: RwLock<HashMap<String, Goal>>,
}

impl MemoryStore {
    /// Fresh store, seeded with the default categories.
    pub fn new() -> Self {
        let categories: HashMap<String, Category> = seed::default_categories()
            .into_iter()
            .map(|new| {
                let record = Category::create(new);
                (record.id.clone(), record)
            })
            .collect();

        Self {
            transactions: RwLock::new(HashMap::new()),
            categories: RwLock::new(categories),
            budgets: RwLock::new(HashMap::new()),
            goals: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

async fn update_record<E, P>(
    collection: &RwLock<HashMap<String, E>>,
    id: &str,
    patch: P,
) -> Option<E>
where
    E: Clone,
    P: Patch<E>,
{
    let mut records = collection.write().await;
    let record = records.get_mut(id)?;
    patch.apply(record);
    Some(record.clone())
}

#[async_trait]
impl Storage for MemoryStore {
    async fn transactions(&self) -> ResultStore<Vec<Transaction>> {
        let mut records: Vec<Transaction> =
            self.transactions.read().await.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn transaction(&self, id: &str) -> ResultStore<Option<Transaction>> {
        Ok(self.transactions.read().await.get(id).cloned())
    }

    async fn create_transaction(&self, new: NewTransaction) -> ResultStore<Transaction> {
        let record = Transaction::create(new);
        self.transactions
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_transaction(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> ResultStore<Option<Transaction>> {
        Ok(update_record(&self.transactions, id, patch).await)
    }

    async fn delete_transaction(&self, id: &str) -> ResultStore<bool> {
        Ok(self.transactions.write().await.remove(id).is_some())
    }

    async fn categories(&self) -> ResultStore<Vec<Category>> {
        Ok(self.categories.read().await.values().cloned().collect())
    }

    async fn category(&self, id: &str) -> ResultStore<Option<Category>> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn create_category(&self, new: NewCategory) -> ResultStore<Category> {
        let record = Category::create(new);
        self.categories
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn budgets(&self) -> ResultStore<Vec<Budget>> {
        Ok(self.budgets.read().await.values().cloned().collect())
    }

    async fn budgets_by_month(&self, month: &str) -> ResultStore<Vec<Budget>> {
        Ok(self
            .budgets
            .read()
            .await
            .values()
            .filter(|budget| budget.month == month)
            .cloned()
            .collect())
    }

    async fn create_budget(&self, new: NewBudget) -> ResultStore<Budget> {
        let record = Budget::create(new);
        self.budgets
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_budget(&self, id: &str, patch: BudgetPatch) -> ResultStore<Option<Budget>> {
        Ok(update_record(&self.budgets, id, patch).await)
    }

    async fn goals(&self) -> ResultStore<Vec<Goal>> {
        Ok(self.goals.read().await.values().cloned().collect())
    }

    async fn goal(&self, id: &str) -> ResultStore<Option<Goal>> {
        Ok(self.goals.read().await.get(id).cloned())
    }

    async fn create_goal(&self, new: NewGoal) -> ResultStore<Goal> {
        let record = Goal::create(new);
        self.goals
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_goal(&self, id: &str, patch: GoalPatch) -> ResultStore<Option<Goal>> {
        Ok(update_record(&self.goals, id, patch).await)
    }

    async fn delete_goal(&self, id: &str) -> ResultStore<bool> {
        Ok(self.goals.write().await.remove(id).is_some())
    }
}
