//! Daily report fetching.
//!
//! Reports are published once a day as `<base>/<MM-DD-YYYY>.csv`. When
//! today's file is not up yet, yesterday's is used instead. There is no
//! further lookback.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::{info, warn};

/// Published location of the daily reports.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_daily_reports";

/// One row of a daily report, reduced to the columns the loader keeps.
///
/// Counts are kept as the raw CSV text; [`crate::transform`] turns them
/// into exact decimals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportRow {
    #[serde(
        rename = "Province_State",
        alias = "Province/State",
        deserialize_with = "blank_as_none"
    )]
    pub region: Option<String>,
    #[serde(rename = "Country_Region", alias = "Country/Region")]
    pub country: String,
    #[serde(rename = "Last_Update", alias = "Last Update")]
    pub last_update: String,
    #[serde(rename = "Confirmed")]
    pub confirmed: String,
    #[serde(rename = "Deaths")]
    pub deaths: String,
    #[serde(rename = "Recovered")]
    pub recovered: String,
}

/// Result of a single GET against the report source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The resource exists; carries the response body.
    Found(String),
    /// The resource does not exist (yet).
    NotFound,
}

/// Something that can retrieve a report document by URL.
///
/// Failures other than "not found" are returned as `Err`.
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    async fn get(&self, url: &str) -> Result<FetchOutcome>;
}

/// The region column must be present; only its value may be empty.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|region| !region.is_empty()))
}

/// [`ReportSource`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Source whose requests give up after `timeout`, covering connect,
    /// headers and body.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self::new(client))
    }
}

impl ReportSource for HttpSource {
    async fn get(&self, url: &str) -> Result<FetchOutcome> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }

        let body = response
            .error_for_status()?
            .text()
            .await
            .with_context(|| format!("reading body from {url}"))?;
        Ok(FetchOutcome::Found(body))
    }
}

/// Rows of one daily report together with where they came from.
#[derive(Debug, Clone)]
pub struct FetchedReport {
    pub url: String,
    pub date: NaiveDate,
    pub fell_back: bool,
    pub rows: Vec<ReportRow>,
}

/// Builds the dated report URL, e.g. `<base>/03-01-2020.csv`.
pub fn report_url(base_url: &str, date: NaiveDate) -> String {
    format!(
        "{}/{}.csv",
        base_url.trim_end_matches('/'),
        date.format("%m-%d-%Y")
    )
}

/// Fetches the report for `today`, falling back to the day before exactly
/// once if today's report does not exist.
pub async fn fetch_report<S: ReportSource>(
    source: &S,
    base_url: &str,
    today: NaiveDate,
) -> Result<FetchedReport> {
    let url = report_url(base_url, today);
    if let FetchOutcome::Found(body) = source.get(&url).await? {
        info!("Fetched {url}");
        return Ok(FetchedReport {
            rows: parse_report(&body).with_context(|| format!("parsing {url}"))?,
            url,
            date: today,
            fell_back: false,
        });
    }

    let yesterday = today
        .pred_opt()
        .with_context(|| format!("no date before {today}"))?;
    let fallback_url = report_url(base_url, yesterday);
    warn!("{url} not found");
    info!(">> Pulling previous day data >> {fallback_url}");

    match source.get(&fallback_url).await? {
        FetchOutcome::Found(body) => Ok(FetchedReport {
            rows: parse_report(&body).with_context(|| format!("parsing {fallback_url}"))?,
            url: fallback_url,
            date: yesterday,
            fell_back: true,
        }),
        FetchOutcome::NotFound => {
            bail!("no daily report published at {url} or {fallback_url}")
        }
    }
}

/// Parses a report CSV, keeping the loader's columns in source order.
///
/// Columns are matched by header name; any other columns are ignored and a
/// missing required column fails the whole parse.
pub fn parse_report(body: &str) -> Result<Vec<ReportRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(body.as_bytes());

    reader
        .deserialize::<ReportRow>()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("reading report row {}", i + 1)))
        .collect()
}
