use chrono::Local;
use covid_tracker::{
    config::{self, PipelineConfig},
    dynamodb::DynamoDb,
    logging, pipeline,
    source::HttpSource,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

// Trigger payload and invocation context are accepted but not used.
async fn handle_request(
    ddb: &DynamoDb,
    source: &HttpSource,
    pipeline_config: &PipelineConfig,
    _event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let summary = pipeline::run(ddb, source, pipeline_config, Local::now().date_naive()).await?;

    Ok(json!({
        "table": summary.table_name,
        "source": summary.source_url,
        "reportDate": summary.report_date.to_string(),
        "fellBack": summary.fell_back,
        "recordsWritten": summary.records_written,
    }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_lambda_logging()?;

    let sdk_config = config::load_sdk_config().await;
    let ddb = DynamoDb::new(&sdk_config);
    let pipeline_config = PipelineConfig::default();
    let source = HttpSource::with_timeout(pipeline_config.fetch_timeout)?;

    let ddb = &ddb;
    let source = &source;
    let pipeline_config = &pipeline_config;
    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(ddb, source, pipeline_config, event).await
    }))
    .await
}
