/// DynamoDB table configuration.
///
/// Describes the key layout and provisioned capacity used when the table
/// is (re)created. Both key attributes are string-typed.
///
/// # Table Structure
///
/// - **Table Name**: A unique identifier for the table within your AWS account and region.
/// - **Primary Key**: Consists of a partition key and an optional sort key.
///   - **Partition Key**: Determines the partition where the item is stored.
///   - **Sort Key**: Optional. Orders items sharing a partition key. It does not make
///     the attribute unique on its own.
///
/// # Capacity
///
/// Tables are created in provisioned mode. The defaults (1 read, 1 write unit)
/// are the smallest DynamoDB accepts.
///
/// # Example
///
/// ```
/// use covid_tracker::dynamodb::Table;
///
/// let table = Table::new("tcovid19", "index", Some("country")).with_capacity(5, 5);
/// assert_eq!(table.write_capacity_units(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Table<'a> {
    name: &'a str,
    partition_key: &'a str,
    sort_key: Option<&'a str>,
    read_capacity_units: i64,
    write_capacity_units: i64,
}

impl<'a> Table<'a> {
    /// Creates a new `Table` instance with minimal provisioned capacity.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the DynamoDB table.
    /// * `partition_key` - The name of the partition key attribute.
    /// * `sort_key` - The name of the sort key attribute, if any.
    pub fn new(name: &'a str, partition_key: &'a str, sort_key: Option<&'a str>) -> Self {
        Self {
            name,
            partition_key,
            sort_key,
            read_capacity_units: 1,
            write_capacity_units: 1,
        }
    }

    /// Returns the name of the table.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the partition key of the table.
    pub fn partition_key(&self) -> &str {
        self.partition_key
    }

    /// Returns the sort key of the table, if any.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key
    }

    pub fn read_capacity_units(&self) -> i64 {
        self.read_capacity_units
    }

    pub fn write_capacity_units(&self) -> i64 {
        self.write_capacity_units
    }

    /// Overrides the provisioned throughput and returns the modified `Table`.
    pub fn with_capacity(mut self, read: i64, write: i64) -> Self {
        self.read_capacity_units = read;
        self.write_capacity_units = write;
        self
    }
}
