use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;

use crate::config::Config;
use crate::types::ScoresFile;
use crate::utils::format_date;

fn trim_bucket(bucket_url: &str) -> &str {
    bucket_url.trim_end_matches('/')
}

pub fn scores_url(bucket_url: &str) -> String {
    format!("{}/scores.json", trim_bucket(bucket_url))
}

pub fn sunset_image_url_for(bucket_url: &str, date: NaiveDate) -> String {
    format!(
        "{}/{}/best_sunset.jpg",
        trim_bucket(bucket_url),
        format_date(date)
    )
}

/// Storage path of the best capture for a `YYYY-MM-DD...` string. Only the
/// year, month and day positions are read, anything after them is ignored.
/// Surrounding whitespace is trimmed first.
pub fn sunset_image_url(bucket_url: &str, date: &str) -> Result<String> {
    let date = date.trim();
    let part = |range: std::ops::Range<usize>| {
        date.get(range)
            .ok_or_else(|| anyhow!("Date too short for an image path: {:?}", date))
    };
    let (year, month, day) = (part(0..4)?, part(5..7)?, part(8..10)?);

    Ok(format!(
        "{}/{}-{}-{}/best_sunset.jpg",
        trim_bucket(bucket_url),
        year,
        month,
        day
    ))
}

fn check_status(url: &str, status: reqwest::StatusCode) -> Result<()> {
    if !status.is_success() {
        bail!("{} answered with {}", url, status);
    }
    Ok(())
}

pub fn parse_scores(raw: &str) -> Result<ScoresFile> {
    serde_json::from_str(raw).context("Malformed scores.json")
}

pub struct ScoresClient {
    client: reqwest::Client,
    bucket_url: String,
}

impl ScoresClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            bucket_url: config.bucket_url.clone(),
        })
    }

    pub fn image_url(&self, date: NaiveDate) -> String {
        sunset_image_url_for(&self.bucket_url, date)
    }

    pub async fn fetch_scores(&self) -> Result<ScoresFile> {
        let url = scores_url(&self.bucket_url);
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        check_status(&url, response.status())?;

        let raw = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;
        let scores = parse_scores(&raw)?;

        tracing::info!("Loaded scores for {} days", scores.len());
        Ok(scores)
    }
}
