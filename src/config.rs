use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SYNC_INTERVAL_MINUTES: u64 = 5;
const DEFAULT_SYNC_WINDOW_DAYS: i64 = 7;

/// At least one minute, at most one week between passes.
const SYNC_INTERVAL_MINUTES_RANGE: RangeInclusive<u64> = 1..=10_080;
/// At least one day, at most ten years of suggestions per pass.
const SYNC_WINDOW_DAYS_RANGE: RangeInclusive<i64> = 1..=3_650;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Guild the bot serves; `/edit` is registered here.
    pub guild_id: u64,
    /// Channel whose messages become suggestions.
    pub suggestions_channel_id: u64,

    /// Minutes between display-name reconciliation passes. Cached author names may
    /// lag a nickname change by up to this long.
    pub display_name_sync_interval_minutes: u64,
    /// Suggestions created within this many days are reconciled.
    pub display_name_sync_window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let display_name_sync_interval_minutes = check_range(
            "DISPLAY_NAME_SYNC_INTERVAL_MINUTES",
            optional_env(
                "DISPLAY_NAME_SYNC_INTERVAL_MINUTES",
                DEFAULT_SYNC_INTERVAL_MINUTES,
            )?,
            SYNC_INTERVAL_MINUTES_RANGE,
        )?;
        let display_name_sync_window_days = check_range(
            "DISPLAY_NAME_SYNC_WINDOW_DAYS",
            optional_env("DISPLAY_NAME_SYNC_WINDOW_DAYS", DEFAULT_SYNC_WINDOW_DAYS)?,
            SYNC_WINDOW_DAYS_RANGE,
        )?;

        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            discord_bot_token: required_env("DISCORD_BOT_TOKEN")?,
            guild_id: parse_env("GUILD_ID", required_env("GUILD_ID")?)?,
            suggestions_channel_id: parse_env(
                "SUGGESTIONS_CHANNEL_ID",
                required_env("SUGGESTIONS_CHANNEL_ID")?,
            )?,
            display_name_sync_interval_minutes,
            display_name_sync_window_days,
        })
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(value) => parse_env(name, value),
        Err(_) => Ok(default),
    }
}

fn check_range<T>(name: &str, value: T, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(value);
    }

    Err(ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: format!("must be between {} and {}", range.start(), range.end()),
    })
}

fn parse_env<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason: e.to_string(),
    })
}
