use anyhow::{anyhow, Result};
use std::{env::var, str::FromStr};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub fn get_log_level() -> Result<LevelFilter> {
    match var("LOG_LEVEL") {
        Ok(level) => match level.is_empty() {
            true => Ok(LevelFilter::INFO),
            false => LevelFilter::from_str(level.trim())
                .map_err(|e| anyhow!("Failed to parse LOG_LEVEL {:?}: {}", level, e)),
        },
        Err(_) => Ok(LevelFilter::INFO),
    }
}

pub fn set_logging() -> Result<()> {
    let level = get_log_level()?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(level))
        .try_init()?;

    Ok(())
}
