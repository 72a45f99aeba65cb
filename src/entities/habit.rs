//! Habit entity - a recurring routine with a completion counter.
//!
//! `streak` advances by exactly one per distinct completion day and is never
//! decremented automatically on missed days. `last_completed_at` is the
//! calendar day of the most recent completion, or `None` for a fresh habit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Frequency {
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
}

/// Habit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "habits")]
pub struct Model {
    /// Unique identifier for the habit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this habit belongs to
    pub user_id: String,
    /// Habit title, never empty
    pub title: String,
    /// Daily or weekly cadence
    pub frequency: Frequency,
    /// Completion counter, never negative
    pub streak: i32,
    /// Calendar day of the most recent completion
    pub last_completed_at: Option<Date>,
    /// Optional display color token
    pub color: Option<String>,
    /// Optional display icon name
    pub icon: Option<String>,
    /// Whether due-reminders are enabled for this habit
    pub reminders_enabled: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Habit and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One habit has many completion-log entries
    #[sea_orm(has_many = "super::habit_completion::Entity")]
    Completions,
}

impl Related<super::habit_completion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Completions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
