//! Budget records.
//!
//! A budget caps one category for one calendar month. `spent` is
//! store-managed: creation forces it to zero no matter what the payload
//! carries, and it only moves through updates. Budgets cannot be deleted,
//! only adjusted in place.

use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Patch, StoreError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    /// Calendar month in `YYYY-MM` form; filtered by exact string match.
    pub month: String,
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
}

/// Creation payload. A caller-supplied `spent` is accepted and discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub month: String,
    pub category: String,
    pub limit: Decimal,
    #[serde(default)]
    pub spent: Option<Decimal>,
}

impl Budget {
    pub(crate) fn create(new: NewBudget) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            month: new.month,
            category: new.category,
            limit: new.limit,
            spent: Decimal::ZERO,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetPatch {
    pub month: Option<String>,
    pub category: Option<String>,
    pub limit: Option<Decimal>,
    pub spent: Option<Decimal>,
}

impl Patch<Budget> for BudgetPatch {
    fn apply(self, record: &mut Budget) {
        if let Some(month) = self.month {
            record.month = month;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(limit) = self.limit {
            record.limit = limit;
        }
        if let Some(spent) = self.spent {
            record.spent = spent;
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub month: String,
    pub category: String,
    pub limit: String,
    pub spent: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Budget> for ActiveModel {
    fn from(record: &Budget) -> Self {
        Self {
            id: ActiveValue::Set(record.id.clone()),
            month: ActiveValue::Set(record.month.clone()),
            category: ActiveValue::Set(record.category.clone()),
            limit: ActiveValue::Set(record.limit.to_string()),
            spent: ActiveValue::Set(record.spent.to_string()),
        }
    }
}

impl TryFrom<Model> for Budget {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            limit: Decimal::from_str(&model.limit).map_err(|err| {
                StoreError::Corrupt(format!("budget {}: bad limit: {err}", model.id))
            })?,
            spent: Decimal::from_str(&model.spent).map_err(|err| {
                StoreError::Corrupt(format!("budget {}: bad spent: {err}", model.id))
            })?,
            id: model.id,
            month: model.month,
            category: model.category,
        })
    }
}
