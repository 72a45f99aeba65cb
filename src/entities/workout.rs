//! Workout entity - one logged fitness session.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Perceived session intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum WorkoutIntensity {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

/// Workout database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workouts")]
pub struct Model {
    /// Unique identifier for the workout
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this workout belongs to
    pub user_id: String,
    /// Kind of session (e.g. "Running", "Yoga" or a custom name)
    pub workout_type: String,
    /// Session length in minutes, never negative
    pub duration_minutes: i32,
    /// Perceived intensity
    pub intensity: WorkoutIntensity,
    /// Free-text notes
    pub notes: String,
    /// Calendar day the session happened
    pub date: Date,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
