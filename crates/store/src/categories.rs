//! Category records.
//!
//! Categories are append-only: the contract has no update or delete for
//! them. Name uniqueness is a convention, not an enforced invariant.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{StoreError, transactions::TransactionKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Icon identifier the UI resolves, e.g. `fas fa-utensils`.
    pub icon: String,
    /// Style token the UI resolves, e.g. `hsl(var(--chart-1))`.
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub icon: String,
    pub color: String,
}

impl Category {
    pub(crate) fn create(new: NewCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            kind: new.kind,
            icon: new.icon,
            color: new.color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub kind: String,
    pub icon: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Category> for ActiveModel {
    fn from(record: &Category) -> Self {
        Self {
            id: ActiveValue::Set(record.id.clone()),
            name: ActiveValue::Set(record.name.clone()),
            kind: ActiveValue::Set(record.kind.as_str().to_string()),
            icon: ActiveValue::Set(record.icon.clone()),
            color: ActiveValue::Set(record.color.clone()),
        }
    }
}

impl TryFrom<Model> for Category {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: TransactionKind::try_from(model.kind.as_str())?,
            id: model.id,
            name: model.name,
            icon: model.icon,
            color: model.color,
        })
    }
}
