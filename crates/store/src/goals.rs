//! Savings goal records.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Patch, StoreError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. `current_amount` is accepted and discarded: progress
/// starts at zero and only moves through updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Option<Decimal>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub(crate) fn create(new: NewGoal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            target_amount: new.target_amount,
            current_amount: Decimal::ZERO,
            deadline: new.deadline,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    #[serde(deserialize_with = "crate::patch::double_option")]
    pub deadline: Option<Option<NaiveDate>>,
}

impl Patch<Goal> for GoalPatch {
    fn apply(self, record: &mut Goal) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(target_amount) = self.target_amount {
            record.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            record.current_amount = current_amount;
        }
        if let Some(deadline) = self.deadline {
            record.deadline = deadline;
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Goal> for ActiveModel {
    fn from(record: &Goal) -> Self {
        Self {
            id: ActiveValue::Set(record.id.clone()),
            name: ActiveValue::Set(record.name.clone()),
            target_amount: ActiveValue::Set(record.target_amount.to_string()),
            current_amount: ActiveValue::Set(record.current_amount.to_string()),
            deadline: ActiveValue::Set(record.deadline),
            created_at: ActiveValue::Set(record.created_at),
        }
    }
}

impl TryFrom<Model> for Goal {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            target_amount: Decimal::from_str(&model.target_amount).map_err(|err| {
                StoreError::Corrupt(format!("goal {}: bad target amount: {err}", model.id))
            })?,
            current_amount: Decimal::from_str(&model.current_amount).map_err(|err| {
                StoreError::Corrupt(format!("goal {}: bad current amount: {err}", model.id))
            })?,
            id: model.id,
            name: model.name,
            deadline: model.deadline,
            created_at: model.created_at,
        })
    }
}
