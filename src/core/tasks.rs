//! Task business logic - CRUD, status toggling and view filtering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, Order, Set};

use crate::entities::task::{TaskPriority, TaskStatus};
use crate::entities::{Task, TaskColumn, task};
use crate::errors::{Error, Result};
use crate::session::User;
use crate::store;

/// Fields for a new task. Status always starts at todo.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub category: String,
    pub estimated_minutes: i32,
}

/// Editable fields of an existing task. Status is toggled separately.
#[derive(Debug, Clone)]
pub struct TaskEdit {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub category: String,
    pub estimated_minutes: i32,
}

/// Creates a task in the todo state.
pub async fn create_task(db: &DatabaseConnection, user: &User, new: NewTask) -> Result<task::Model> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(Error::validation("task title cannot be empty"));
    }

    let task = task::ActiveModel {
        user_id: Set(user.id.clone()),
        title: Set(title.to_string()),
        description: Set(new.description),
        due_date: Set(new.due_date),
        status: Set(TaskStatus::Todo),
        priority: Set(new.priority),
        category: Set(new.category),
        estimated_minutes: Set(new.estimated_minutes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    task.insert(db).await.map_err(Into::into)
}

/// Updates a task's editable fields.
pub async fn update_task(
    db: &DatabaseConnection,
    user: &User,
    task_id: i64,
    edit: TaskEdit,
) -> Result<task::Model> {
    let title = edit.title.trim();
    if title.is_empty() {
        return Err(Error::validation("task title cannot be empty"));
    }

    let existing = store::fetch_owned::<Task>(db, &user.id, task_id).await?;
    let mut active: task::ActiveModel = existing.into();
    active.title = Set(title.to_string());
    active.description = Set(edit.description);
    active.due_date = Set(edit.due_date);
    active.priority = Set(edit.priority);
    active.category = Set(edit.category);
    active.estimated_minutes = Set(edit.estimated_minutes);

    active.update(db).await.map_err(Into::into)
}

/// Flips a task between todo and completed.
pub async fn toggle_task_status(
    db: &DatabaseConnection,
    user: &User,
    task_id: i64,
) -> Result<task::Model> {
    let existing = store::fetch_owned::<Task>(db, &user.id, task_id).await?;
    let next = match existing.status {
        TaskStatus::Todo => TaskStatus::Completed,
        TaskStatus::Completed => TaskStatus::Todo,
    };

    let mut active: task::ActiveModel = existing.into();
    active.status = Set(next);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a task.
pub async fn delete_task(db: &DatabaseConnection, user: &User, task_id: i64) -> Result<()> {
    store::delete_owned::<Task>(db, &user.id, task_id).await
}

/// Lists a user's tasks, newest first.
pub async fn list_tasks(db: &DatabaseConnection, user: &User) -> Result<Vec<task::Model>> {
    store::list_for_user::<Task>(db, &user.id, TaskColumn::CreatedAt, Order::Desc, None).await
}

/// Number of tasks still in the todo state.
pub async fn count_open_tasks(db: &DatabaseConnection, user: &User) -> Result<u64> {
    store::count_for_user_where::<Task>(
        db,
        &user.id,
        Condition::all().add(TaskColumn::Status.eq(TaskStatus::Todo)),
    )
    .await
}

/// Open tasks due on the given day (the dashboard's focus list).
#[must_use]
pub fn due_today(tasks: &[task::Model], today: NaiveDate) -> Vec<task::Model> {
    tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Todo && task.due_date == Some(today))
        .cloned()
        .collect()
}

/// How a filtered task list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    /// Newest first
    #[default]
    Created,
    /// Soonest due first; tasks without a due date sort last
    DueDate,
    /// High before medium before low
    Priority,
}

/// View filter over an in-memory task list.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Case-insensitive needle matched against title and description
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub category: Option<String>,
    pub sort: TaskSort,
}

/// Applies search/status/category filters and the requested ordering.
#[must_use]
pub fn filter_and_sort(tasks: &[task::Model], query: &TaskQuery) -> Vec<task::Model> {
    let needle = query.search.as_deref().map(str::to_lowercase);

    let mut rows: Vec<task::Model> = tasks
        .iter()
        .filter(|task| {
            let matches_search = needle.as_deref().is_none_or(|needle| {
                task.title.to_lowercase().contains(needle)
                    || task.description.to_lowercase().contains(needle)
            });
            let matches_status = query.status.is_none_or(|status| task.status == status);
            let matches_category = query
                .category
                .as_deref()
                .is_none_or(|category| task.category == category);
            matches_search && matches_status && matches_category
        })
        .cloned()
        .collect();

    match query.sort {
        TaskSort::Created => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        TaskSort::DueDate => rows.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        TaskSort::Priority => rows.sort_by_key(|task| task.priority.rank()),
    }

    rows
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_task, day, setup_test_db, task_with_id, test_user};

    #[tokio::test]
    async fn test_create_task_starts_todo() -> Result<()> {
        let db = setup_test_db().await?;
        let user = test_user();

        let task = create_test_task(&db, &user, "Write report").await?;

        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.title, "Write report");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_title() -> Result<()> {
        let db = setup_test_db().await?;
        let user = test_user();

        let result = create_task(
            &db,
            &user,
            NewTask {
                title: String::new(),
                description: String::new(),
                due_date: None,
                priority: TaskPriority::Medium,
                category: "general".to_string(),
                estimated_minutes: 0,
            },
        )
        .await;

        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_flips_both_ways() -> Result<()> {
        let db = setup_test_db().await?;
        let user = test_user();
        let task = create_test_task(&db, &user, "Write report").await?;

        let completed = toggle_task_status(&db, &user, task.id).await?;
        assert_eq!(completed.status, TaskStatus::Completed);

        let reopened = toggle_task_status(&db, &user, task.id).await?;
        assert_eq!(reopened.status, TaskStatus::Todo);
        Ok(())
    }

    #[tokio::test]
    async fn test_count_open_tasks_ignores_completed() -> Result<()> {
        let db = setup_test_db().await?;
        let user = test_user();
        create_test_task(&db, &user, "One").await?;
        let done = create_test_task(&db, &user, "Two").await?;
        toggle_task_status(&db, &user, done.id).await?;

        assert_eq!(count_open_tasks(&db, &user).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_task_then_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let user = test_user();
        let task = create_test_task(&db, &user, "Throwaway").await?;

        delete_task(&db, &user, task.id).await?;
        let result = delete_task(&db, &user, task.id).await;

        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));
        Ok(())
    }

    #[test]
    fn test_filter_by_search_and_status() {
        let mut groceries = task_with_id(1);
        groceries.title = "Buy groceries".to_string();
        let mut report = task_with_id(2);
        report.title = "Write report".to_string();
        report.status = TaskStatus::Completed;

        let tasks = [groceries, report];

        let query = TaskQuery {
            search: Some("GROC".to_string()),
            ..TaskQuery::default()
        };
        let found = filter_and_sort(&tasks, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let query = TaskQuery {
            status: Some(TaskStatus::Completed),
            ..TaskQuery::default()
        };
        let found = filter_and_sort(&tasks, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_sort_by_due_date_puts_undated_last() {
        let mut soon = task_with_id(1);
        soon.due_date = Some(day(2024, 3, 10));
        let mut later = task_with_id(2);
        later.due_date = Some(day(2024, 4, 1));
        let undated = task_with_id(3);

        let query = TaskQuery {
            sort: TaskSort::DueDate,
            ..TaskQuery::default()
        };
        let sorted = filter_and_sort(&[undated, later, soon], &query);
        let ids: Vec<i64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_priority_high_first() {
        let mut low = task_with_id(1);
        low.priority = TaskPriority::Low;
        let mut high = task_with_id(2);
        high.priority = TaskPriority::High;
        let mut medium = task_with_id(3);
        medium.priority = TaskPriority::Medium;

        let query = TaskQuery {
            sort: TaskSort::Priority,
            ..TaskQuery::default()
        };
        let sorted = filter_and_sort(&[low, high, medium], &query);
        let ids: Vec<i64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_due_today_only_open_tasks() {
        let today = day(2024, 3, 10);
        let mut due_open = task_with_id(1);
        due_open.due_date = Some(today);
        let mut due_done = task_with_id(2);
        due_done.due_date = Some(today);
        due_done.status = TaskStatus::Completed;
        let mut due_later = task_with_id(3);
        due_later.due_date = Some(day(2024, 3, 11));

        let focus = due_today(&[due_open, due_done, due_later], today);
        assert_eq!(focus.len(), 1);
        assert_eq!(focus[0].id, 1);
    }
}
