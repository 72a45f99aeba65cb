use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orbit::config::AppConfig;
use orbit::errors::Result;
use orbit::session::Session;
use orbit::{clock, config, core};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = AppConfig::load()?;

    // 4. Initialize the records store
    let db = config::database::create_connection(&app_config.database_url()).await?;
    config::database::create_tables(&db).await?;
    info!("Records store initialized.");

    // 5. Build the session from the configured identity, if any
    let session = Session::signed_out();
    if let Some(profile) = app_config.identity() {
        session.sign_in(profile.into_user());
    }

    // 6. Log the dashboard snapshot for the signed-in user
    match session.current_user() {
        Some(user) => {
            let snapshot = core::dashboard::load_snapshot(&db, &user, clock::today()).await?;
            info!(
                "{}, {}. Here is your life at a glance.",
                core::dashboard::greeting(clock::current_hour()),
                user.display_name
            );
            info!(
                open_tasks = snapshot.open_tasks,
                habits = snapshot.habit_count,
                habit_completion_rate = snapshot.habit_completion_rate,
                total_spending = snapshot.total_spending,
                total_savings = snapshot.total_savings,
                workouts = snapshot.workout_count,
                notes = snapshot.note_count,
                "Dashboard snapshot"
            );
        }
        None => info!(
            "No identity configured; set ORBIT_USER_ID or add an [identity] section to orbit.toml."
        ),
    }

    Ok(())
}
