//! Transaction records.
//!
//! A `Transaction` is a single dated income or expense. Its `category`
//! field is a soft reference: it carries a [`Category`] name as a plain
//! string and the store never checks it against the category collection.
//!
//! [`Category`]: super::categories::Category

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Patch, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(StoreError::Corrupt(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload. The store assigns the id and stamps `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    pub(crate) fn create(new: NewTransaction) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: new.kind,
            amount: new.amount,
            category: new.category,
            date: new.date,
            description: new.description,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionPatch {
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "crate::patch::double_option")]
    pub description: Option<Option<String>>,
}

impl Patch<Transaction> for TransactionPatch {
    fn apply(self, record: &mut Transaction) {
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub date: Date,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(record: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(record.id.clone()),
            kind: ActiveValue::Set(record.kind.as_str().to_string()),
            amount: ActiveValue::Set(record.amount.to_string()),
            category: ActiveValue::Set(record.category.clone()),
            date: ActiveValue::Set(record.date),
            description: ActiveValue::Set(record.description.clone()),
            created_at: ActiveValue::Set(record.created_at),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: TransactionKind::try_from(model.kind.as_str())?,
            amount: Decimal::from_str(&model.amount).map_err(|err| {
                StoreError::Corrupt(format!("transaction {}: bad amount: {err}", model.id))
            })?,
            id: model.id,
            category: model.category,
            date: model.date,
            description: model.description,
            created_at: model.created_at,
        })
    }
}
