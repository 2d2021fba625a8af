use anyhow::Result;
use chrono::Local;
use covid_tracker::{
    config::{self, PipelineConfig},
    dynamodb::DynamoDb,
    logging, pipeline,
    source::HttpSource,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;
    dotenv::dotenv().ok();

    let sdk_config = config::load_sdk_config().await;
    let ddb = DynamoDb::new(&sdk_config);
    let config = PipelineConfig::default();
    let source = HttpSource::with_timeout(config.fetch_timeout)?;

    let summary = pipeline::run(&ddb, &source, &config, Local::now().date_naive()).await?;

    info!(
        ">> PUT COVID-19 data: {} records from {} into '{}'",
        summary.records_written, summary.source_url, summary.table_name
    );
    Ok(())
}
