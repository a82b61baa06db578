use super::Error;

/// Error when the catalog has no table with the requested name.
#[derive(Debug)]
pub(super) struct TableNotFound {
    table: Box<str>,
}

impl std::error::Error for TableNotFound {}

impl core::fmt::Display for TableNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table not found: {}", self.table)
    }
}

impl Error {
    /// Creates a table not found error.
    pub fn table_not_found(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNotFound(TableNotFound {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a table not found error.
    pub fn is_table_not_found(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::TableNotFound(_))
    }
}
