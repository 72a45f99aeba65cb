//! Fitness log business logic - workout CRUD and totals.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Order, Set};

use crate::entities::workout::WorkoutIntensity;
use crate::entities::{Workout, WorkoutColumn, workout};
use crate::errors::{Error, Result};
use crate::session::User;
use crate::store;

/// Fields for a new workout entry.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub workout_type: String,
    pub duration_minutes: i32,
    pub intensity: WorkoutIntensity,
    pub notes: String,
    pub date: NaiveDate,
}

fn validate(new: &NewWorkout) -> Result<()> {
    if new.workout_type.trim().is_empty() {
        return Err(Error::validation("workout type cannot be empty"));
    }
    if new.duration_minutes < 0 {
        return Err(Error::validation("workout duration cannot be negative"));
    }
    Ok(())
}

/// Logs a workout session.
pub async fn log_workout(
    db: &DatabaseConnection,
    user: &User,
    new: NewWorkout,
) -> Result<workout::Model> {
    validate(&new)?;

    let workout = workout::ActiveModel {
        user_id: Set(user.id.clone()),
        workout_type: Set(new.workout_type.trim().to_string()),
        duration_minutes: Set(new.duration_minutes),
        intensity: Set(new.intensity),
        notes: Set(new.notes),
        date: Set(new.date),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    workout.insert(db).await.map_err(Into::into)
}

/// Rewrites a workout's fields.
pub async fn update_workout(
    db: &DatabaseConnection,
    user: &User,
    workout_id: i64,
    edit: NewWorkout,
) -> Result<workout::Model> {
    validate(&edit)?;

    let existing = store::fetch_owned::<Workout>(db, &user.id, workout_id).await?;
    let mut active: workout::ActiveModel = existing.into();
    active.workout_type = Set(edit.workout_type.trim().to_string());
    active.duration_minutes = Set(edit.duration_minutes);
    active.intensity = Set(edit.intensity);
    active.notes = Set(edit.notes);
    active.date = Set(edit.date);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a workout entry.
pub async fn delete_workout(db: &DatabaseConnection, user: &User, workout_id: i64) -> Result<()> {
    store::delete_owned::<Workout>(db, &user.id, workout_id).await
}

/// Lists a user's workouts, most recent day first.
pub async fn list_workouts(db: &DatabaseConnection, user: &User) -> Result<Vec<workout::Model>> {
    store::list_for_user::<Workout>(db, &user.id, WorkoutColumn::Date, Order::Desc, None).await
}

/// Rolled-up session stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTotals {
    pub sessions: usize,
    pub total_minutes: i64,
}

/// Totals over an in-memory workout list.
#[must_use]
pub fn totals(workouts: &[workout::Model]) -> WorkoutTotals {
    WorkoutTotals {
        sessions: workouts.len(),
        total_minutes: workouts
            .iter()
            .map(|w| i64::from(w.duration_minutes))
            .sum(),
    }
}
