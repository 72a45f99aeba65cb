//! Savings goal entity - a target amount being saved towards.
//!
//! `current_amount` may legitimately exceed `target_amount` (over-funded
//! goal); only display math clamps the progress percentage.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Savings goal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "savings_goals")]
pub struct Model {
    /// Unique identifier for the goal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this goal belongs to
    pub user_id: String,
    /// Human-readable goal title (e.g. "Emergency fund")
    pub title: String,
    /// Target amount, always positive
    pub target_amount: f64,
    /// Amount saved so far; not clamped to the target
    pub current_amount: f64,
    /// Optional deadline day
    pub deadline: Option<Date>,
    /// Optional display color token
    pub color: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
