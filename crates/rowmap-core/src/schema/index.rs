/// A secondary index, created after the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index identifier, unique within the schema
    pub name: String,

    /// Indexed column names, in annotation order
    pub columns: Vec<String>,
}
