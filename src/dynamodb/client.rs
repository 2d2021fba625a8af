use anyhow::{Context, Result};
use aws_sdk_dynamodb::{
    client::Waiters,
    operation::scan::ScanOutput,
    types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ProvisionedThroughput,
        ScalarAttributeType, StreamSpecification,
    },
    Client,
};
use std::time::Duration;
use tracing::{debug, info};

use crate::dynamodb::{Item, Table, TableStore};

/// DynamoDB client wrapper implementing [`TableStore`].
///
/// Constructed once at process start from the resolved `SdkConfig` and
/// handed to the components that talk to the store. Nothing in the crate
/// keeps a global client.
///
/// # Operations
///
/// - **List**: Page through every table name in the account/region
/// - **Delete / Create**: Issue table lifecycle requests
/// - **Wait**: Poll with the SDK waiters until a table is gone or active
/// - **Put**: Write a single item
/// - **Scan**: Read every item back (used for verification)
///
/// # Error Handling
///
/// Every method returns `anyhow::Result` with the failing operation and
/// table named in the error context.
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Reads every item of a table, following `LastEvaluatedKey` pagination.
    pub async fn scan_table(&self, table_name: &str) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut scan = self.client.scan().table_name(table_name);

            if let Some(key) = last_evaluated_key {
                scan = scan.set_exclusive_start_key(Some(key));
            }

            let response: ScanOutput = scan
                .send()
                .await
                .with_context(|| format!("scanning table '{table_name}'"))?;

            if let Some(new_items) = response.items {
                items.extend(new_items.into_iter().map(Item::from));
            }

            last_evaluated_key = response.last_evaluated_key;

            if last_evaluated_key.is_none() {
                break;
            }
        }

        Ok(items)
    }
}

impl TableStore for DynamoDb {
    async fn list_table_names(&self) -> Result<Vec<String>> {
        self.client
            .list_tables()
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .context("listing tables")
    }

    async fn delete_table(&self, table_name: &str) -> Result<()> {
        self.client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .with_context(|| format!("deleting table '{table_name}'"))?;
        debug!("Delete requested for '{table_name}'");
        Ok(())
    }

    async fn wait_until_absent(&self, table_name: &str, timeout: Duration) -> Result<()> {
        self.client
            .wait_until_table_not_exists()
            .table_name(table_name)
            .wait(timeout)
            .await
            .with_context(|| format!("waiting for table '{table_name}' to be deleted"))?;
        Ok(())
    }

    async fn create_table(&self, table: &Table<'_>) -> Result<()> {
        let mut attribute_definitions = vec![AttributeDefinition::builder()
            .attribute_name(table.partition_key())
            .attribute_type(ScalarAttributeType::S)
            .build()?];

        let mut key_schema = vec![KeySchemaElement::builder()
            .attribute_name(table.partition_key())
            .key_type(KeyType::Hash)
            .build()?];

        if let Some(sort_key) = table.sort_key() {
            attribute_definitions.push(
                AttributeDefinition::builder()
                    .attribute_name(sort_key)
                    .attribute_type(ScalarAttributeType::S)
                    .build()?,
            );
            key_schema.push(
                KeySchemaElement::builder()
                    .attribute_name(sort_key)
                    .key_type(KeyType::Range)
                    .build()?,
            );
        }

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(table.read_capacity_units())
            .write_capacity_units(table.write_capacity_units())
            .build()?;

        let streams = StreamSpecification::builder().stream_enabled(false).build()?;

        self.client
            .create_table()
            .table_name(table.name())
            .billing_mode(BillingMode::Provisioned)
            .set_attribute_definitions(Some(attribute_definitions))
            .set_key_schema(Some(key_schema))
            .provisioned_throughput(throughput)
            .stream_specification(streams)
            .send()
            .await
            .with_context(|| format!("creating table '{}'", table.name()))?;
        debug!("Create requested for '{}'", table.name());
        Ok(())
    }

    async fn wait_until_active(&self, table_name: &str, timeout: Duration) -> Result<()> {
        self.client
            .wait_until_table_exists()
            .table_name(table_name)
            .wait(timeout)
            .await
            .with_context(|| format!("waiting for table '{table_name}' to become active"))?;
        info!("Table '{table_name}' is active");
        Ok(())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.attributes))
            .send()
            .await
            .with_context(|| format!("putting item into '{table_name}'"))?;
        Ok(())
    }
}
