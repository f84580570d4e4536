use std::{sync::Arc, time::Duration};

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    bot::gateway::DiscordGateway, config::Config, error::AppError,
    service::display_name::DisplayNameService,
};

/// Delay before the first pass, so names changed while the bot was offline are fixed
/// without waiting a full interval.
const STARTUP_DELAY: Duration = Duration::from_secs(10);

/// Starts the display-name reconciliation scheduler
///
/// Runs one pass shortly after startup and then one every
/// `display_name_sync_interval_minutes`. Passes only touch suggestions created within
/// the last `display_name_sync_window_days`. A pass is idempotent, so a slow pass
/// overlapping the next tick does no harm.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client used to resolve names and re-render embeds
/// - `config`: Application configuration
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    config: &Config,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let gateway = Arc::new(DiscordGateway::new(
        discord_http,
        config.guild_id,
        config.suggestions_channel_id,
    ));
    let window = chrono::Duration::days(config.display_name_sync_window_days);
    let interval = Duration::from_secs(config.display_name_sync_interval_minutes * 60);

    let job_db = db.clone();
    let job_gateway = gateway.clone();
    let repeated = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let db = job_db.clone();
        let gateway = job_gateway.clone();

        Box::pin(async move {
            run_pass(&db, &gateway, window).await;
        })
    })?;

    let startup = Job::new_one_shot_async(STARTUP_DELAY, move |_uuid, _lock| {
        let db = db.clone();
        let gateway = gateway.clone();

        Box::pin(async move {
            run_pass(&db, &gateway, window).await;
        })
    })?;

    scheduler.add(repeated).await?;
    scheduler.add(startup).await?;
    scheduler.start().await?;

    tracing::info!(
        "Display name scheduler started (every {} min, {} day window)",
        config.display_name_sync_interval_minutes,
        config.display_name_sync_window_days
    );

    Ok(())
}

async fn run_pass(db: &DatabaseConnection, gateway: &DiscordGateway, window: chrono::Duration) {
    let service = DisplayNameService::new(db, gateway);

    if let Err(e) = service.reconcile(Utc::now() - window).await {
        tracing::error!("Error reconciling display names: {}", e);
    }
}
