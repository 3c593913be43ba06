use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use std::env;
use std::time::Duration;

pub const DEFAULT_BUCKET_URL: &str = "https://thesunset.s3.amazonaws.com";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bucket_url: String,
    pub http_timeout: Duration,
    pub offline: bool,
    pub month: u32,
    pub year: i32,
}

pub fn load() -> Result<Config> {
    let args: Vec<String> = env::args().skip(1).collect();
    from_parts(
        env::var("SUNSET_BUCKET_URL").ok(),
        env::var("SUNSET_HTTP_TIMEOUT_SECS").ok(),
        env::var("SUNSET_OFFLINE").ok(),
        &args,
    )
}

/// Builds a config from raw environment values and positional `[MONTH] [YEAR]`.
pub fn from_parts(
    bucket_url: Option<String>,
    http_timeout_secs: Option<String>,
    offline: Option<String>,
    args: &[String],
) -> Result<Config> {
    let bucket_url = bucket_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BUCKET_URL.to_string());

    let http_timeout_secs = match http_timeout_secs {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("SUNSET_HTTP_TIMEOUT_SECS is not a number: {:?}", raw))?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };

    let offline = offline
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    let today = Local::now().date_naive();
    let (month, year) = match args {
        [] => (today.month(), today.year()),
        [month] => (parse_month(month)?, today.year()),
        [month, year] => (parse_month(month)?, parse_year(year)?),
        _ => bail!("Usage: sunset-calendar [MONTH] [YEAR]"),
    };

    Ok(Config {
        bucket_url,
        http_timeout: Duration::from_secs(http_timeout_secs),
        offline,
        month,
        year,
    })
}

fn parse_month(raw: &str) -> Result<u32> {
    let month = raw
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Month is not a number: {:?}", raw))?;
    if !(1..=12).contains(&month) {
        bail!("Month must be between 1 and 12, got {}", month);
    }
    Ok(month)
}

fn parse_year(raw: &str) -> Result<i32> {
    let year = raw
        .trim()
        .parse::<i32>()
        .with_context(|| format!("Year is not a number: {:?}", raw))?;
    if !(1000..=9999).contains(&year) {
        bail!("Year must have four digits, got {}", year);
    }
    Ok(year)
}
