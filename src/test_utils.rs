//! Shared test utilities for Orbit.
//!
//! Provides the in-memory database setup used by every integration test,
//! seeded entity helpers with sensible defaults, and plain in-memory model
//! constructors for the pure statistics tests.

use chrono::{DateTime, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::core::{finance, habits, tasks};
use crate::entities::habit::Frequency;
use crate::entities::subscription::BillingCycle;
use crate::entities::task::{TaskPriority, TaskStatus};
use crate::entities::{budget, expense, habit, habit_completion, income, note, savings_goal,
    subscription, task};
use crate::errors::Result;
use crate::session::User;

/// Creates an in-memory SQLite database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The default acting user for tests.
#[must_use]
pub fn test_user() -> User {
    User {
        id: "user_test".to_string(),
        display_name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

/// A second user, for ownership-scoping tests.
#[must_use]
pub fn other_user() -> User {
    User {
        id: "user_other".to_string(),
        display_name: "Other User".to_string(),
        email: "other@example.com".to_string(),
    }
}

/// Shorthand for building calendar days in tests.
#[must_use]
pub fn day(year: i32, month: u32, day_of_month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day_of_month).expect("valid test date")
}

/// Creates a test task with sensible defaults.
///
/// # Defaults
/// * `description`: empty
/// * `due_date`: None
/// * `priority`: medium
/// * `category`: "general"
pub async fn create_test_task(
    db: &DatabaseConnection,
    user: &User,
    title: &str,
) -> Result<task::Model> {
    tasks::create_task(
        db,
        user,
        tasks::NewTask {
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            priority: TaskPriority::Medium,
            category: "general".to_string(),
            estimated_minutes: 0,
        },
    )
    .await
}

/// Creates a test habit with sensible defaults (daily, no color/icon,
/// reminders off).
pub async fn create_test_habit(
    db: &DatabaseConnection,
    user: &User,
    title: &str,
) -> Result<habit::Model> {
    habits::create_habit(
        db,
        user,
        habits::NewHabit {
            title: title.to_string(),
            frequency: Frequency::Daily,
            color: None,
            icon: None,
            reminders_enabled: false,
        },
    )
    .await
}

/// Records a test expense with an empty note.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    user: &User,
    amount: f64,
    category: &str,
    date: NaiveDate,
) -> Result<expense::Model> {
    finance::add_expense(
        db,
        user,
        finance::NewExpense {
            amount,
            category: category.to_string(),
            date,
            note: String::new(),
        },
    )
    .await
}

// --- Plain in-memory models for the pure statistics tests ---

/// An expense model that never touched a database.
#[must_use]
pub fn expense_on(amount: f64, category: &str, date: NaiveDate) -> expense::Model {
    expense::Model {
        id: 0,
        user_id: test_user().id,
        amount,
        category: category.to_string(),
        date,
        note: String::new(),
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// An income model that never touched a database.
#[must_use]
pub fn income_on(amount: f64, date: NaiveDate) -> income::Model {
    income::Model {
        id: 0,
        user_id: test_user().id,
        amount,
        source: "Salary".to_string(),
        date,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A completion-log model that never touched a database.
#[must_use]
pub fn completion_on(habit_id: i64, completed_at: NaiveDate) -> habit_completion::Model {
    habit_completion::Model {
        id: 0,
        user_id: test_user().id,
        habit_id,
        completed_at,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A default habit model with the given ID.
#[must_use]
pub fn habit_with_id(id: i64) -> habit::Model {
    habit::Model {
        id,
        user_id: test_user().id,
        title: format!("habit {id}"),
        frequency: Frequency::Daily,
        streak: 0,
        last_completed_at: None,
        color: None,
        icon: None,
        reminders_enabled: false,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A default todo task model with the given ID.
#[must_use]
pub fn task_with_id(id: i64) -> task::Model {
    task::Model {
        id,
        user_id: test_user().id,
        title: format!("task {id}"),
        description: String::new(),
        due_date: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        category: "general".to_string(),
        estimated_minutes: 0,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A default unpinned note model with the given ID.
#[must_use]
pub fn note_with_id(id: i64) -> note::Model {
    note::Model {
        id,
        user_id: test_user().id,
        title: format!("note {id}"),
        content: String::new(),
        color: None,
        is_pinned: false,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A savings-goal model with the given funding state.
#[must_use]
pub fn goal_with(id: i64, current_amount: f64, target_amount: f64) -> savings_goal::Model {
    savings_goal::Model {
        id,
        user_id: test_user().id,
        title: format!("goal {id}"),
        target_amount,
        current_amount,
        deadline: None,
        color: None,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A budget model with the given category and limit.
#[must_use]
pub fn budget_with(id: i64, category: &str, amount: f64) -> budget::Model {
    budget::Model {
        id,
        user_id: test_user().id,
        category: category.to_string(),
        amount,
        created_at: DateTime::UNIX_EPOCH,
    }
}

/// A subscription model with the given amount and cycle.
#[must_use]
pub fn subscription_with(id: i64, amount: f64, billing_cycle: BillingCycle) -> subscription::Model {
    subscription::Model {
        id,
        user_id: test_user().id,
        name: format!("subscription {id}"),
        amount,
        billing_cycle,
        next_payment_date: day(2024, 1, 1),
        color: None,
        created_at: DateTime::UNIX_EPOCH,
    }
}
