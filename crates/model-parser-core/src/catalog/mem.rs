use super::Catalog;
use crate::{
    schema::db::{Column, Table},
    Error, Result,
};
use indexmap::IndexMap;

/// A catalog held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    tables: IndexMap<String, Table>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table, replacing any table with the same name.
    pub fn table(mut self, table: Table) -> Self {
        self.insert(table);
        self
    }

    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    fn get(&self, table: &str) -> Result<&Table> {
        self.tables
            .get(table)
            .ok_or_else(|| Error::table_not_found(table))
    }
}

impl Catalog for MemoryCatalog {
    fn columns(&self, table: &str) -> Result<Vec<String>> {
        let table = self.get(table)?;
        Ok(table
            .columns
            .iter()
            .map(|column| column.name.clone())
            .collect())
    }

    fn column(&self, table: &str, column: &str) -> Result<Column> {
        self.get(table)?
            .column_by_name(column)
            .cloned()
            .ok_or_else(|| Error::column_not_found(table, column))
    }
}
