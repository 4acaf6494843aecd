use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use store::{
    BudgetPatch, DatabaseStore, GoalPatch, MemoryStore, NewBudget, NewCategory, NewGoal,
    NewTransaction, Storage, TransactionKind, TransactionPatch,
};

async fn backends() -> Vec<(&'static str, Box<dyn Storage>)> {
    let database = DatabaseStore::connect("sqlite::memory:").await.unwrap();
    vec![
        ("memory", Box::new(MemoryStore::new()) as Box<dyn Storage>),
        ("database", Box::new(database)),
    ]
}

fn new_transaction(kind: TransactionKind, amount: i64, date: &str) -> NewTransaction {
    NewTransaction {
        kind,
        amount: Decimal::from(amount),
        category: "อาหาร".to_string(),
        date: date.parse().unwrap(),
        description: Some("lunch".to_string()),
    }
}

fn new_budget(month: &str, limit: i64) -> NewBudget {
    NewBudget {
        month: month.to_string(),
        category: "อาหาร".to_string(),
        limit: Decimal::from(limit),
        spent: None,
    }
}

#[tokio::test]
async fn create_assigns_fresh_id_and_get_returns_equal_record() {
    for (backend, store) in backends().await {
        let first = store
            .create_transaction(new_transaction(TransactionKind::Expense, 120, "2026-08-01"))
            .await
            .unwrap();
        let second = store
            .create_transaction(new_transaction(TransactionKind::Expense, 80, "2026-08-02"))
            .await
            .unwrap();

        assert!(!first.id.is_empty(), "{backend}");
        assert_ne!(first.id, second.id, "{backend}");

        let fetched = store.transaction(&first.id).await.unwrap();
        assert_eq!(fetched, Some(first), "{backend}");
    }
}

#[tokio::test]
async fn create_does_not_trust_payload_for_stamped_fields() {
    for (backend, store) in backends().await {
        let created = store
            .create_transaction(new_transaction(TransactionKind::Income, 500, "2026-08-03"))
            .await
            .unwrap();

        assert_eq!(created.amount, Decimal::from(500), "{backend}");
        assert_eq!(created.description, Some("lunch".to_string()), "{backend}");
        // created_at is stamped by the store, not the caller.
        assert!(created.created_at.timestamp() > 0, "{backend}");
    }
}

#[tokio::test]
async fn transactions_are_sorted_by_date_descending() {
    for (backend, store) in backends().await {
        for date in ["2026-03-15", "2026-08-01", "2025-12-31", "2026-05-20"] {
            store
                .create_transaction(new_transaction(TransactionKind::Expense, 10, date))
                .await
                .unwrap();
        }

        let dates: Vec<String> = store
            .transactions()
            .await
            .unwrap()
            .iter()
            .map(|t| t.date.to_string())
            .collect();
        assert_eq!(
            dates,
            ["2026-08-01", "2026-05-20", "2026-03-15", "2025-12-31"],
            "{backend}"
        );
    }
}

#[tokio::test]
async fn update_merges_shallowly_and_preserves_absent_fields() {
    for (backend, store) in backends().await {
        let created = store
            .create_transaction(new_transaction(TransactionKind::Expense, 120, "2026-08-01"))
            .await
            .unwrap();

        let patch = TransactionPatch {
            amount: Some(Decimal::from(99)),
            ..Default::default()
        };
        let updated = store
            .update_transaction(&created.id, patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.amount, Decimal::from(99), "{backend}");
        assert_eq!(updated.category, created.category, "{backend}");
        assert_eq!(updated.date, created.date, "{backend}");
        assert_eq!(updated.description, created.description, "{backend}");
        assert_eq!(updated.created_at, created.created_at, "{backend}");
    }
}

#[tokio::test]
async fn empty_patch_is_a_noop() {
    for (backend, store) in backends().await {
        let created = store
            .create_transaction(new_transaction(TransactionKind::Expense, 120, "2026-08-01"))
            .await
            .unwrap();

        let updated = store
            .update_transaction(&created.id, TransactionPatch::default())
            .await
            .unwrap();

        assert_eq!(updated, Some(created), "{backend}");
    }
}

#[tokio::test]
async fn patch_can_null_a_nullable_field() {
    for (backend, store) in backends().await {
        let created = store
            .create_transaction(new_transaction(TransactionKind::Expense, 120, "2026-08-01"))
            .await
            .unwrap();
        assert!(created.description.is_some(), "{backend}");

        let patch = TransactionPatch {
            description: Some(None),
            ..Default::default()
        };
        let updated = store
            .update_transaction(&created.id, patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.description, None, "{backend}");
    }
}

#[tokio::test]
async fn unknown_ids_report_absence_never_errors() {
    for (backend, store) in backends().await {
        let id = Uuid::new_v4().to_string();

        assert_eq!(store.transaction(&id).await.unwrap(), None, "{backend}");
        assert_eq!(
            store
                .update_transaction(&id, TransactionPatch::default())
                .await
                .unwrap(),
            None,
            "{backend}"
        );
        assert!(!store.delete_transaction(&id).await.unwrap(), "{backend}");

        assert_eq!(store.goal(&id).await.unwrap(), None, "{backend}");
        assert_eq!(
            store.update_goal(&id, GoalPatch::default()).await.unwrap(),
            None,
            "{backend}"
        );
        assert!(!store.delete_goal(&id).await.unwrap(), "{backend}");

        assert_eq!(store.category(&id).await.unwrap(), None, "{backend}");
        assert_eq!(
            store
                .update_budget(&id, BudgetPatch::default())
                .await
                .unwrap(),
            None,
            "{backend}"
        );
    }
}

#[tokio::test]
async fn delete_is_idempotent() {
    for (backend, store) in backends().await {
        let created = store
            .create_transaction(new_transaction(TransactionKind::Expense, 120, "2026-08-01"))
            .await
            .unwrap();

        assert!(store.delete_transaction(&created.id).await.unwrap(), "{backend}");
        assert!(!store.delete_transaction(&created.id).await.unwrap(), "{backend}");
        assert_eq!(store.transaction(&created.id).await.unwrap(), None, "{backend}");
    }
}

#[tokio::test]
async fn budget_creation_forces_spent_to_zero() {
    for (backend, store) in backends().await {
        let mut payload = new_budget("2026-08", 5_000);
        payload.spent = Some(Decimal::from(999));

        let budget = store.create_budget(payload).await.unwrap();

        assert_eq!(budget.spent, Decimal::ZERO, "{backend}");
        assert_eq!(budget.limit, Decimal::from(5_000), "{backend}");
    }
}

#[tokio::test]
async fn budgets_filter_by_exact_month() {
    for (backend, store) in backends().await {
        store.create_budget(new_budget("2026-08", 100)).await.unwrap();
        store.create_budget(new_budget("2026-07", 200)).await.unwrap();
        store.create_budget(new_budget("2026-08", 300)).await.unwrap();

        let august = store.budgets_by_month("2026-08").await.unwrap();
        assert_eq!(august.len(), 2, "{backend}");
        assert!(august.iter().all(|b| b.month == "2026-08"), "{backend}");

        assert!(store.budgets_by_month("2025-08").await.unwrap().is_empty(), "{backend}");
        assert_eq!(store.budgets().await.unwrap().len(), 3, "{backend}");
    }
}

#[tokio::test]
async fn budget_update_can_move_spent() {
    for (backend, store) in backends().await {
        let budget = store.create_budget(new_budget("2026-08", 100)).await.unwrap();

        let patch = BudgetPatch {
            spent: Some(Decimal::from(42)),
            ..Default::default()
        };
        let updated = store.update_budget(&budget.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.spent, Decimal::from(42), "{backend}");
        assert_eq!(updated.limit, budget.limit, "{backend}");
        assert_eq!(updated.month, budget.month, "{backend}");
    }
}

#[tokio::test]
async fn goal_creation_forces_progress_and_stamps_created_at() {
    for (backend, store) in backends().await {
        let goal = store
            .create_goal(NewGoal {
                name: "เที่ยวญี่ปุ่น".to_string(),
                target_amount: Decimal::from(80_000),
                current_amount: Some(Decimal::from(12_345)),
                deadline: None,
            })
            .await
            .unwrap();

        assert_eq!(goal.current_amount, Decimal::ZERO, "{backend}");
        assert_eq!(goal.deadline, None, "{backend}");
        assert!(goal.created_at.timestamp() > 0, "{backend}");

        let fetched = store.goal(&goal.id).await.unwrap();
        assert_eq!(fetched, Some(goal), "{backend}");
    }
}

#[tokio::test]
async fn goal_patch_sets_and_clears_deadline() {
    for (backend, store) in backends().await {
        let goal = store
            .create_goal(NewGoal {
                name: "กองทุนฉุกเฉิน".to_string(),
                target_amount: Decimal::from(50_000),
                current_amount: None,
                deadline: None,
            })
            .await
            .unwrap();

        let deadline = "2027-01-31".parse().unwrap();
        let updated = store
            .update_goal(
                &goal.id,
                GoalPatch {
                    deadline: Some(Some(deadline)),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.deadline, Some(deadline), "{backend}");

        let cleared = store
            .update_goal(
                &goal.id,
                GoalPatch {
                    deadline: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cleared.deadline, None, "{backend}");
        assert_eq!(cleared.name, goal.name, "{backend}");
    }
}

#[tokio::test]
async fn fresh_store_seeds_the_default_categories() {
    for (backend, store) in backends().await {
        let categories = store.categories().await.unwrap();

        assert_eq!(categories.len(), 10, "{backend}");

        let expense = categories
            .iter()
            .filter(|c| c.kind == TransactionKind::Expense)
            .count();
        let income = categories
            .iter()
            .filter(|c| c.kind == TransactionKind::Income)
            .count();
        assert_eq!((expense, income), (7, 3), "{backend}");

        for name in ["อาหาร", "เงินเดือน", "การลงทุน"] {
            assert!(categories.iter().any(|c| c.name == name), "{backend}: {name}");
        }

        let mut ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10, "{backend}");
    }
}

#[tokio::test]
async fn created_categories_are_returned_and_fetchable() {
    for (backend, store) in backends().await {
        let category = store
            .create_category(NewCategory {
                name: "ของขวัญ".to_string(),
                kind: TransactionKind::Expense,
                icon: "fas fa-gift".to_string(),
                color: "hsl(var(--chart-3))".to_string(),
            })
            .await
            .unwrap();

        let fetched = store.category(&category.id).await.unwrap();
        assert_eq!(fetched, Some(category), "{backend}");
        assert_eq!(store.categories().await.unwrap().len(), 11, "{backend}");
    }
}

#[tokio::test]
async fn database_seeding_is_idempotent_across_connects() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("store_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let first = DatabaseStore::connect(&url).await.unwrap();
    assert_eq!(first.categories().await.unwrap().len(), 10);
    drop(first);

    let second = DatabaseStore::connect(&url).await.unwrap();
    assert_eq!(second.categories().await.unwrap().len(), 10);

    std::fs::remove_file(&path).ok();
}

#[test]
fn patch_deserialization_distinguishes_absent_from_null() {
    let clear: TransactionPatch = serde_json::from_value(json!({ "description": null })).unwrap();
    assert_eq!(clear.description, Some(None));

    let keep: TransactionPatch = serde_json::from_value(json!({})).unwrap();
    assert_eq!(keep.description, None);

    let set: GoalPatch = serde_json::from_value(json!({ "deadline": "2027-01-31" })).unwrap();
    assert_eq!(set.deadline, Some(Some("2027-01-31".parse().unwrap())));
}
