//! Expense entity - a single spent amount on a calendar day.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this expense belongs to
    pub user_id: String,
    /// Spent amount, always non-negative
    pub amount: f64,
    /// Spending category name (unknown names render with the default color)
    pub category: String,
    /// Calendar day the money was spent
    pub date: Date,
    /// Free-text note
    pub note: String,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
