//! Task entity - a to-do item with priority, category and optional due date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Two-state task status; tasks are toggled, not moved through a workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TaskStatus {
    #[sea_orm(string_value = "todo")]
    Todo,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Task priority, used for sorting (high first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TaskPriority {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

impl TaskPriority {
    /// Sort rank: high sorts before medium sorts before low.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            TaskPriority::High => 0,
            TaskPriority::Medium => 1,
            TaskPriority::Low => 2,
        }
    }
}

/// Task database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this task belongs to
    pub user_id: String,
    /// Task title, never empty
    pub title: String,
    /// Longer free-text description (may be empty)
    pub description: String,
    /// Optional calendar day the task is due
    pub due_date: Option<Date>,
    /// Current status (todo/completed)
    pub status: TaskStatus,
    /// Priority level
    pub priority: TaskPriority,
    /// Category slug (e.g. "work", "personal")
    pub category: String,
    /// Estimated effort in minutes (0 when not estimated)
    pub estimated_minutes: i32,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
