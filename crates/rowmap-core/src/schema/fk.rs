/// A (possibly composite) foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Local column names
    pub columns: Vec<String>,

    /// The referenced table
    pub reference_table: String,

    /// Referenced column names, parallel to `columns`
    pub reference_columns: Vec<String>,
}
