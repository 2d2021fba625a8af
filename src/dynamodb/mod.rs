//! # DynamoDB Module
//!
//! Thin layer over `aws_sdk_dynamodb` covering what the loader needs from
//! the store: listing tables, dropping and recreating the report table,
//! and writing single items.
//!
//! ## Components
//!
//! - `TableStore`: the store operations the pipeline depends on.
//! - `DynamoDb`: the `TableStore` backed by a real DynamoDB client.
//! - `Item`: A DynamoDB item as a typed attribute map.
//! - `Table`: Name, key schema and provisioned capacity of a table.
//!
//! ## Usage
//!
//! Credentials and region are resolved by `aws_config`. The usual
//! environment variables apply:
//!
//! - `AWS_ACCESS_KEY_ID`: Your AWS access key ID.
//! - `AWS_SECRET_ACCESS_KEY`: Your AWS secret access key.
//! - `AWS_REGION`: The AWS region of the table (defaults to `us-east-1`).
//!
//! Optionally, you can also set:
//! - `AWS_SESSION_TOKEN`: If you're using temporary credentials.
//! - `AWS_ENDPOINT_URL`: For using a custom endpoint (e.g., DynamoDB Local).
//!
//! ## Example
//!
//! ```no_run
//! use covid_tracker::dynamodb::{DynamoDb, Item, Table, TableStore};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = aws_config::load_from_env().await;
//! let ddb = DynamoDb::new(&config);
//!
//! let table = Table::new("tcovid19", "index", Some("country"));
//! ddb.create_table(&table).await?;
//! ddb.wait_until_active("tcovid19", Duration::from_secs(300)).await?;
//!
//! let item = Item::new()
//!     .set_string("index", "qwertyui")
//!     .set_string("country", "Italy");
//! ddb.put_item("tcovid19", item).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod item;
mod table;

pub use client::DynamoDb;
pub use item::Item;
pub use table::Table;

use anyhow::Result;
use std::time::Duration;

/// Store operations the pipeline is written against.
///
/// Every method is a single remote call (or a bounded wait). Composition
/// into "drop if present" and "create and wait" lives in
/// [`crate::lifecycle`].
#[allow(async_fn_in_trait)]
pub trait TableStore {
    /// Returns the names of every table visible to the client.
    async fn list_table_names(&self) -> Result<Vec<String>>;

    /// Issues a delete for `table_name` without waiting for it to finish.
    async fn delete_table(&self, table_name: &str) -> Result<()>;

    /// Blocks until `table_name` no longer exists, or fails after `timeout`.
    async fn wait_until_absent(&self, table_name: &str, timeout: Duration) -> Result<()>;

    /// Issues a create for `table` without waiting for it to become active.
    async fn create_table(&self, table: &Table<'_>) -> Result<()>;

    /// Blocks until `table_name` is active, or fails after `timeout`.
    async fn wait_until_active(&self, table_name: &str, timeout: Duration) -> Result<()>;

    /// Writes one item, replacing any item with the same full key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<()>;
}
