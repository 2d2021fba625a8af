use aws_sdk_dynamodb::types::AttributeValue;
use bigdecimal::BigDecimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Represents a DynamoDB item as a typed attribute map.
///
/// In DynamoDB, an item is a collection of attributes, each with a name and a value.
/// Only the two scalar types the loader writes are exposed here:
///
/// - `S` for text.
/// - `N` for numbers. DynamoDB transmits numbers as decimal strings, so a
///   `BigDecimal` goes over the wire digit for digit with no binary rounding.
///
/// # Primary Key
///
/// - Every item in a table is uniquely identified by its primary key.
/// - A put with a full key that already exists replaces the stored item.
///
/// # Example
///
/// ```
/// use bigdecimal::BigDecimal;
/// use covid_tracker::dynamodb::Item;
///
/// let item = Item::new()
///     .set_string("country", "Italy")
///     .set_number("confirmed", &BigDecimal::from(100));
/// assert_eq!(item.get_number("confirmed"), Some(BigDecimal::from(100)));
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    /// Sets a number attribute from its exact decimal representation.
    pub fn set_number(mut self, key: impl Into<String>, value: &BigDecimal) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::N(value.to_string()));
        self
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    /// Gets the value of an attribute as a decimal.
    ///
    /// Returns `None` if the attribute doesn't exist, is not a number, or can't be parsed.
    pub fn get_number(&self, key: &str) -> Option<BigDecimal> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_n().ok())
            .and_then(|n| BigDecimal::from_str(n).ok())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<HashMap<String, AttributeValue>> for Item {
    fn from(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }
}
