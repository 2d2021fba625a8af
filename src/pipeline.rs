//! The daily load: drop, create, fetch, load. Strictly in that order.
//!
//! Any failure ends the run. Nothing is retried or rolled back, so a
//! failed run leaves the table in whatever state the last completed stage
//! produced and has to be started again from the top.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fmt;
use tracing::info;

use crate::config::PipelineConfig;
use crate::dynamodb::TableStore;
use crate::lifecycle::{self, report_table};
use crate::loader;
use crate::source::{self, ReportSource};
use crate::transform;

/// Progress of a run. A failure after a given stage is reported as
/// `FAILED after <stage>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    TableDropped,
    TableCreated,
    DataFetched,
    Loading,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "START",
            Stage::TableDropped => "TABLE_DROPPED",
            Stage::TableCreated => "TABLE_CREATED",
            Stage::DataFetched => "DATA_FETCHED",
            Stage::Loading => "LOADING",
            Stage::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub table_name: String,
    pub source_url: String,
    pub report_date: NaiveDate,
    pub fell_back: bool,
    pub records_written: usize,
}

/// Replaces the contents of the configured table with the daily report for
/// `today` (or the day before, if today's is not published).
pub async fn run<S, R>(
    store: &S,
    source: &R,
    config: &PipelineConfig,
    today: NaiveDate,
) -> Result<RunSummary>
where
    S: TableStore,
    R: ReportSource,
{
    let mut stage = Stage::Start;
    let outcome = run_stages(store, source, config, today, &mut stage).await;
    outcome.with_context(|| format!("daily load FAILED after {stage}"))
}

async fn run_stages<S, R>(
    store: &S,
    source: &R,
    config: &PipelineConfig,
    today: NaiveDate,
    stage: &mut Stage,
) -> Result<RunSummary>
where
    S: TableStore,
    R: ReportSource,
{
    let table = report_table(&config.table_name);

    lifecycle::delete_table(store, table.name(), config.wait_timeout).await?;
    advance(stage, Stage::TableDropped);

    lifecycle::create_table(store, &table, config.wait_timeout).await?;
    advance(stage, Stage::TableCreated);

    let report = source::fetch_report(source, &config.source_base_url, today).await?;
    info!("{} rows in {}", report.rows.len(), report.url);
    advance(stage, Stage::DataFetched);

    advance(stage, Stage::Loading);
    let records_written =
        loader::load(store, table.name(), transform::transform(report.rows)).await?;
    advance(stage, Stage::Done);

    Ok(RunSummary {
        table_name: config.table_name.clone(),
        source_url: report.url,
        report_date: report.date,
        fell_back: report.fell_back,
        records_written,
    })
}

fn advance(stage: &mut Stage, next: Stage) {
    info!("{stage} -> {next}");
    *stage = next;
}
