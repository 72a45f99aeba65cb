//! Habit business logic - CRUD, the completion flow and streak tracking.
//!
//! Completing a habit mutates two places: the habit's summary fields
//! (counter + last completion day) and the append-only completion log.
//! Both writes happen inside one database transaction so a failure of
//! either half leaves neither applied.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::entities::{Habit, HabitColumn, HabitCompletion, HabitCompletionColumn, habit,
    habit_completion};
use crate::entities::habit::Frequency;
use crate::errors::{Error, Result};
use crate::session::User;
use crate::store;

/// Fields for a new habit.
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub title: String,
    pub frequency: Frequency,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub reminders_enabled: bool,
}

/// Editable fields of an existing habit. Counter fields are deliberately
/// absent; only the completion flow touches those.
#[derive(Debug, Clone)]
pub struct HabitEdit {
    pub title: String,
    pub frequency: Frequency,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub reminders_enabled: bool,
}

/// Creates a habit with a zeroed counter and no completions.
pub async fn create_habit(
    db: &DatabaseConnection,
    user: &User,
    new: NewHabit,
) -> Result<habit::Model> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(Error::validation("habit title cannot be empty"));
    }

    let habit = habit::ActiveModel {
        user_id: Set(user.id.clone()),
        title: Set(title.to_string()),
        frequency: Set(new.frequency),
        streak: Set(0),
        last_completed_at: Set(None),
        color: Set(new.color),
        icon: Set(new.icon),
        reminders_enabled: Set(new.reminders_enabled),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    habit.insert(db).await.map_err(Into::into)
}

/// Updates a habit's editable fields.
pub async fn update_habit(
    db: &DatabaseConnection,
    user: &User,
    habit_id: i64,
    edit: HabitEdit,
) -> Result<habit::Model> {
    let title = edit.title.trim();
    if title.is_empty() {
        return Err(Error::validation("habit title cannot be empty"));
    }

    let existing = store::fetch_owned::<Habit>(db, &user.id, habit_id).await?;
    let mut active: habit::ActiveModel = existing.into();
    active.title = Set(title.to_string());
    active.frequency = Set(edit.frequency);
    active.color = Set(edit.color);
    active.icon = Set(edit.icon);
    active.reminders_enabled = Set(edit.reminders_enabled);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a habit. Completion-log rows are retained; the log is
/// append-only and the overall activity heatmap keeps counting them.
pub async fn delete_habit(db: &DatabaseConnection, user: &User, habit_id: i64) -> Result<()> {
    store::delete_owned::<Habit>(db, &user.id, habit_id).await
}

/// Lists a user's habits, newest first.
pub async fn list_habits(db: &DatabaseConnection, user: &User) -> Result<Vec<habit::Model>> {
    store::list_for_user::<Habit>(db, &user.id, HabitColumn::CreatedAt, sea_orm::Order::Desc, None)
        .await
}

/// Most recent completion-log entries across all habits, newest first.
pub async fn recent_completions(
    db: &DatabaseConnection,
    user: &User,
    limit: u64,
) -> Result<Vec<habit_completion::Model>> {
    store::list_for_user::<HabitCompletion>(
        db,
        &user.id,
        HabitCompletionColumn::CompletedAt,
        sea_orm::Order::Desc,
        Some(limit),
    )
    .await
}

/// Marks a habit completed for `today`: bumps the counter, records the day
/// and appends one completion-log entry, all in one transaction. A habit
/// already completed today is refused before anything is written.
///
/// The counter advances on any new completion day; it does not require the
/// previous completion to have been yesterday.
pub async fn complete_habit(
    db: &DatabaseConnection,
    user: &User,
    habit_id: i64,
    today: NaiveDate,
) -> Result<habit::Model> {
    let txn = db.begin().await?;

    let habit = Habit::find_by_id(habit_id)
        .filter(HabitColumn::UserId.eq(user.id.as_str()))
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "habit",
            id: habit_id,
        })?;

    if habit.last_completed_at == Some(today) {
        return Err(Error::HabitAlreadyCompleted { title: habit.title });
    }

    let new_streak = habit.streak + 1;
    let mut active: habit::ActiveModel = habit.into();
    active.streak = Set(new_streak);
    active.last_completed_at = Set(Some(today));
    let updated = active.update(&txn).await?;

    habit_completion::ActiveModel {
        user_id: Set(user.id.clone()),
        habit_id: Set(habit_id),
        completed_at: Set(today),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(updated)
}

/// Whether a habit's most recent completion is today.
#[must_use]
pub fn is_completed_today(habit: &habit::Model, today: NaiveDate) -> bool {
    habit.last_completed_at == Some(today)
}

/// Percentage of habits completed today, rounded to the nearest integer.
/// Defined as 0 when there are no habits.
#[must_use]
pub fn completion_rate(habits: &[habit::Model], today: NaiveDate) -> u8 {
    if habits.is_empty() {
        return 0;
    }
    let done = habits
        .iter()
        .filter(|habit| is_completed_today(habit, today))
        .count();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let rate = (100.0 * done as f64 / habits.len() as f64).round() as u8;
    rate
}

/// Sum of all habit counters.
#[must_use]
pub fn total_streaks(habits: &[habit::Model]) -> i64 {
    habits.iter().map(|habit| i64::from(habit.streak)).sum()
}

/// Highest single habit counter.
#[must_use]
pub fn best_streak(habits: &[habit::Model]) -> i32 {
    habits.iter().map(|habit| habit.streak).max().unwrap_or(0)
}

/// Whether a habit has a logged completion on the given day (the per-habit
/// weekly dot row).
#[must_use]
pub fn completed_on(
    completions: &[habit_completion::Model],
    habit_id: i64,
    day: NaiveDate,
) -> bool {
    completions
        .iter()
        .any(|completion| completion.habit_id == habit_id && completion.completed_at == day)
}
