//! Table lifecycle: make sure the destination table exists and is empty
//! before anything is loaded into it.

use anyhow::Result;
use std::time::Duration;
use tracing::info;

use crate::dynamodb::{Table, TableStore};

/// Partition key of the report table. Holds the synthetic identifier.
pub const PARTITION_KEY: &str = "index";
/// Sort key of the report table.
pub const SORT_KEY: &str = "country";

/// Key layout every run recreates the report table with.
pub fn report_table(name: &str) -> Table<'_> {
    Table::new(name, PARTITION_KEY, Some(SORT_KEY))
}

/// Drops `table_name` if it exists and waits until the store no longer
/// reports it. Returns whether a table was actually dropped.
///
/// An absent table is not an error.
pub async fn delete_table<S: TableStore>(
    store: &S,
    table_name: &str,
    timeout: Duration,
) -> Result<bool> {
    let names = store.list_table_names().await?;

    if !names.iter().any(|name| name == table_name) {
        info!(">> Table '{table_name}' not found");
        return Ok(false);
    }

    store.delete_table(table_name).await?;
    info!("Waiting for '{table_name}' to be deleted ...");
    store.wait_until_absent(table_name, timeout).await?;
    info!(">> Deleted table '{table_name}'");
    Ok(true)
}

/// Creates `table` and waits until the store reports it active.
///
/// Must only be called once the table is known to be absent.
pub async fn create_table<S: TableStore>(
    store: &S,
    table: &Table<'_>,
    timeout: Duration,
) -> Result<()> {
    info!("Creating table '{}'", table.name());
    store.create_table(table).await?;
    info!("Waiting for '{}' ...", table.name());
    store.wait_until_active(table.name(), timeout).await?;
    info!("Create table '{}' succeeded", table.name());
    Ok(())
}
