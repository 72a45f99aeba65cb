//! Dashboard snapshot - one structured view over every module's headline
//! numbers, assembled from the generic store counts and the statistics
//! engines.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::core::{finance, habits, tasks};
use crate::entities::{Note, Workout};
use crate::errors::Result;
use crate::session::User;
use crate::store;

/// Everything the landing view needs in one fetch round.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// Tasks still in the todo state
    pub open_tasks: u64,
    /// Number of tracked habits
    pub habit_count: u64,
    /// Percent of habits completed today (0 when none are tracked)
    pub habit_completion_rate: u8,
    /// Sum of all recorded expenses
    pub total_spending: f64,
    /// Sum of all savings goals' current amounts
    pub total_savings: f64,
    /// Number of logged workout sessions
    pub workout_count: u64,
    /// Number of notes
    pub note_count: u64,
}

/// Loads the snapshot for one user.
pub async fn load_snapshot(
    db: &DatabaseConnection,
    user: &User,
    today: NaiveDate,
) -> Result<DashboardSnapshot> {
    let open_tasks = tasks::count_open_tasks(db, user).await?;
    let habits = habits::list_habits(db, user).await?;
    let expenses = finance::list_expenses(db, user).await?;
    let goals = finance::list_goals(db, user).await?;
    let workout_count = store::count_for_user::<Workout>(db, &user.id).await?;
    let note_count = store::count_for_user::<Note>(db, &user.id).await?;

    Ok(DashboardSnapshot {
        open_tasks,
        habit_count: habits.len() as u64,
        habit_completion_rate: habits::completion_rate(&habits, today),
        total_spending: expenses.iter().map(|e| e.amount).sum(),
        total_savings: goals.iter().map(|g| g.current_amount).sum(),
        workout_count,
        note_count,
    })
}

/// Time-of-day greeting for the dashboard header.
#[must_use]
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
