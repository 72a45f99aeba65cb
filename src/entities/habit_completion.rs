//! Habit completion entity - an append-only log of completion days.
//!
//! One row per habit per day, guarded by the complete flow in
//! `core::habits` rather than by a storage constraint. Rows outlive their
//! habit so the overall activity heatmap keeps counting them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Habit completion database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "habit_completions")]
pub struct Model {
    /// Unique identifier for the log entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this completion belongs to
    pub user_id: String,
    /// ID of the habit that was completed
    pub habit_id: i64,
    /// Calendar day the habit was completed
    pub completed_at: Date,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between HabitCompletion and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each completion belongs to one habit
    #[sea_orm(
        belongs_to = "super::habit::Entity",
        from = "Column::HabitId",
        to = "super::habit::Column::Id"
    )]
    Habit,
}

impl Related<super::habit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Habit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
