//! Income entity - money received on a calendar day.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Income database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "income")]
pub struct Model {
    /// Unique identifier for the income record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this income belongs to
    pub user_id: String,
    /// Received amount, always non-negative
    pub amount: f64,
    /// Where the money came from (free text, e.g. "Salary")
    pub source: String,
    /// Calendar day the money was received
    pub date: Date,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
