use crate::region::resolver::MatchMode;
use anyhow::{anyhow, Result};
use std::{env::var, time::Duration};
use url::Url;

pub const DEFAULT_COUNTRY_API_URL: &str = "https://restcountries.com/v2/all?fields=name,capital";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub fn get_country_api_url() -> Result<Url> {
    let raw = match var("COUNTRY_API_URL") {
        Ok(url) => match url.trim().is_empty() {
            true => {
                tracing::info!("COUNTRY_API_URL is empty, using {}", DEFAULT_COUNTRY_API_URL);
                DEFAULT_COUNTRY_API_URL.to_string()
            }
            false => url,
        },
        Err(_) => DEFAULT_COUNTRY_API_URL.to_string(),
    };

    match Url::parse(raw.trim()) {
        Ok(url) => Ok(url),
        Err(e) => {
            let err = format!("Failed to parse COUNTRY_API_URL {:?}: {}", raw, e);
            tracing::error!("{}", err);
            Err(anyhow!(err))
        }
    }
}

pub fn get_fetch_timeout() -> Result<Duration> {
    match var("FETCH_TIMEOUT_SECS") {
        Ok(secs) => match secs.trim().parse::<u64>() {
            Ok(0) => {
                let err = "FETCH_TIMEOUT_SECS must be greater than zero";
                tracing::error!("{}", err);
                Err(anyhow!(err))
            }
            Ok(secs) => Ok(Duration::from_secs(secs)),
            Err(e) => {
                let err = format!("Failed to parse FETCH_TIMEOUT_SECS to u64: {}", e);
                tracing::error!("{}", err);
                Err(anyhow!(err))
            }
        },
        Err(_) => Ok(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)),
    }
}

pub fn get_match_mode() -> Result<MatchMode> {
    match var("MATCH_MODE") {
        Ok(mode) => match mode.parse::<MatchMode>() {
            Ok(mode) => Ok(mode),
            Err(e) => {
                tracing::error!("{}", e);
                Err(anyhow!(e))
            }
        },
        Err(_) => Ok(MatchMode::Exact),
    }
}

/// Everything the binary needs from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub timeout: Duration,
    pub match_mode: MatchMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            api_url: get_country_api_url()?,
            timeout: get_fetch_timeout()?,
            match_mode: get_match_mode()?,
        })
    }
}
