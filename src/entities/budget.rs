//! Budget entity - a per-category monthly spending limit.
//!
//! The store does not constrain category uniqueness; the writers in
//! `core::finance` enforce at most one budget per category per user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this budget belongs to
    pub user_id: String,
    /// Spending category the limit applies to
    pub category: String,
    /// Limit amount, always positive
    pub amount: f64,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
