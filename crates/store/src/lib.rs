//! In-process data store for the finance tracker.
//!
//! The [`Storage`] trait is the consistency contract: four entity
//! collections with create/get/list/update/delete operations, identity
//! assigned by the store, shallow-merge partial updates, and absence
//! reported as `Option`/`bool` rather than errors. Two backends satisfy
//! it: [`MemoryStore`] keeps everything in process memory and is lost on
//! restart, [`DatabaseStore`] persists through sea-orm. Callers pick one
//! at startup and hand it around as [`DynStorage`].
//!
//! The [`reports`] and [`tax`] modules are pure functions over a
//! `transactions()` snapshot; they hold no state of their own.

use std::sync::Arc;

use async_trait::async_trait;

pub use budgets::{Budget, BudgetPatch, NewBudget};
pub use categories::{Category, NewCategory};
pub use database::DatabaseStore;
pub use error::StoreError;
pub use goals::{Goal, GoalPatch, NewGoal};
pub use memory::MemoryStore;
pub use patch::Patch;
pub use transactions::{NewTransaction, Transaction, TransactionKind, TransactionPatch};

mod budgets;
mod categories;
mod database;
mod error;
mod goals;
mod memory;
mod patch;
pub mod reports;
pub mod seed;
pub mod tax;
mod transactions;

type ResultStore<T> = Result<T, StoreError>;

/// Shared handle to whichever backend was selected at startup.
pub type DynStorage = Arc<dyn Storage>;

/// The storage contract both backends satisfy.
///
/// Identity: `create_*` assigns a fresh opaque id and applies
/// entity-specific defaults before persisting. Partial updates:
/// `update_*` merges the patch shallowly, last write wins per field, and
/// returns the merged record, or `None` when the id is unknown. Deletes
/// are idempotent and report whether a record was actually removed. The
/// store validates nothing on the way in; that is the boundary's job.
#[async_trait]
pub trait Storage: Send + Sync {
    /// All transactions, most recent date first.
    async fn transactions(&self) -> ResultStore<Vec<Transaction>>;
    async fn transaction(&self, id: &str) -> ResultStore<Option<Transaction>>;
    async fn create_transaction(&self, new: NewTransaction) -> ResultStore<Transaction>;
    async fn update_transaction(
        &self,
        id: &str,
        patch: TransactionPatch,
    ) -> ResultStore<Option<Transaction>>;
    async fn delete_transaction(&self, id: &str) -> ResultStore<bool>;

    async fn categories(&self) -> ResultStore<Vec<Category>>;
    async fn category(&self, id: &str) -> ResultStore<Option<Category>>;
    async fn create_category(&self, new: NewCategory) -> ResultStore<Category>;

    async fn budgets(&self) -> ResultStore<Vec<Budget>>;
    /// Budgets whose `month` equals the given `YYYY-MM` string exactly.
    async fn budgets_by_month(&self, month: &str) -> ResultStore<Vec<Budget>>;
    /// Forces `spent` to zero regardless of the payload.
    async fn create_budget(&self, new: NewBudget) -> ResultStore<Budget>;
    async fn update_budget(&self, id: &str, patch: BudgetPatch) -> ResultStore<Option<Budget>>;

    async fn goals(&self) -> ResultStore<Vec<Goal>>;
    async fn goal(&self, id: &str) -> ResultStore<Option<Goal>>;
    /// Forces `current_amount` to zero and stamps `created_at`.
    async fn create_goal(&self, new: NewGoal) -> ResultStore<Goal>;
    async fn update_goal(&self, id: &str, patch: GoalPatch) -> ResultStore<Option<Goal>>;
    async fn delete_goal(&self, id: &str) -> ResultStore<bool>;
}
