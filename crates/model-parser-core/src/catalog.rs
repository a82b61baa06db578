//! Read access to live schema metadata.

mod mem;
pub use mem::MemoryCatalog;

use crate::{schema::db::Column, Result};

/// Reads table and column metadata from a database catalog.
///
/// Implementations must report columns in their declared order and fail with
/// [`Error::table_not_found`](crate::Error::table_not_found) or
/// [`Error::column_not_found`](crate::Error::column_not_found) for unknown
/// names.
pub trait Catalog {
    /// Column names of `table`, in declaration order.
    fn columns(&self, table: &str) -> Result<Vec<String>>;

    /// Declared type and nullability of one column.
    fn column(&self, table: &str, column: &str) -> Result<Column>;
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn columns(&self, table: &str) -> Result<Vec<String>> {
        (**self).columns(table)
    }

    fn column(&self, table: &str, column: &str) -> Result<Column> {
        (**self).column(table, column)
    }
}

impl<T: Catalog + ?Sized> Catalog for Box<T> {
    fn columns(&self, table: &str) -> Result<Vec<String>> {
        (**self).columns(table)
    }

    fn column(&self, table: &str, column: &str) -> Result<Column> {
        (**self).column(table, column)
    }
}
