//! Writes records to the report table, one put per record.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::dynamodb::TableStore;
use crate::ident::{random_string, DEFAULT_ID_LENGTH};
use crate::transform::StoredRecord;

/// Puts every record under a fresh random identifier and returns how many
/// were written.
///
/// Records are written in order with no batching. The first failure
/// (bad record or failed put) stops the load and leaves what was already
/// written in place.
pub async fn load<S, I>(store: &S, table_name: &str, records: I) -> Result<usize>
where
    S: TableStore,
    I: IntoIterator<Item = Result<StoredRecord>>,
{
    let mut written = 0;

    for record in records {
        let record = record?;
        let id = random_string(DEFAULT_ID_LENGTH)?;
        debug!(
            "<< PUT {id}: {} / {} / {}",
            record.country, record.state, record.last_update
        );

        store
            .put_item(table_name, record.to_item(&id))
            .await
            .with_context(|| format!("writing record {} ({})", written + 1, record.country))?;
        written += 1;
    }

    info!(">> PUT {written} records into '{table_name}'");
    Ok(written)
}
