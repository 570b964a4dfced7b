mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::{Assignment, Update};

/// A single SQL statement, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Short name of the statement kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateIndex(_) => "create_index",
            Self::CreateTable(_) => "create_table",
            Self::Delete(_) => "delete",
            Self::Insert(_) => "insert",
            Self::Select(_) => "select",
            Self::Update(_) => "update",
        }
    }
}
