//! Loads the daily COVID-19 case report into a DynamoDB table, replacing
//! whatever the table held before.

pub mod config;
pub mod dynamodb;
pub mod ident;
pub mod lifecycle;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod source;
pub mod transform;
