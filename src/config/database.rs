//! Database configuration module.
//!
//! Handles the SQLite connection and table creation using SeaORM's
//! `Schema::create_table_from_entity`, so the database schema always
//! matches the entity definitions without hand-written SQL.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::{
    Budget, Expense, Habit, HabitCompletion, Income, Note, SavingsGoal, Subscription, Task,
    Workout,
};
use crate::errors::Result;

const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/orbit.sqlite";

/// Resolves the database URL: `DATABASE_URL`, then the configured value,
/// then a default local SQLite file.
#[must_use]
pub fn resolve_database_url(configured: Option<&str>) -> String {
    std::env::var(DATABASE_URL_ENV_VAR)
        .ok()
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    tracing::debug!(url = database_url, "connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all collection tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let statements = [
        schema.create_table_from_entity(Budget),
        schema.create_table_from_entity(Expense),
        schema.create_table_from_entity(Habit),
        schema.create_table_from_entity(HabitCompletion),
        schema.create_table_from_entity(Income),
        schema.create_table_from_entity(Note),
        schema.create_table_from_entity(SavingsGoal),
        schema.create_table_from_entity(Subscription),
        schema.create_table_from_entity(Task),
        schema.create_table_from_entity(Workout),
    ];

    for statement in &statements {
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_create_tables_in_memory() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Every collection is queryable afterwards.
        Budget::find().all(&db).await?;
        Expense::find().all(&db).await?;
        Habit::find().all(&db).await?;
        HabitCompletion::find().all(&db).await?;
        Income::find().all(&db).await?;
        Note::find().all(&db).await?;
        SavingsGoal::find().all(&db).await?;
        Subscription::find().all(&db).await?;
        Task::find().all(&db).await?;
        Workout::find().all(&db).await?;

        Ok(())
    }

    #[test]
    fn test_resolve_database_url_prefers_configured_over_default() {
        // DATABASE_URL is unset in the test environment.
        if std::env::var(DATABASE_URL_ENV_VAR).is_err() {
            assert_eq!(resolve_database_url(Some("sqlite::memory:")), "sqlite::memory:");
            assert_eq!(resolve_database_url(None), DEFAULT_DATABASE_URL);
        }
    }
}
