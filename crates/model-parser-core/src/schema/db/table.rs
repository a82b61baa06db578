use super::{Column, Type};

/// A database table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
        }
    }

    /// Appends a non-nullable column.
    pub fn column(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.columns.push(Column::new(name, ty, false));
        self
    }

    /// Appends a nullable column.
    pub fn nullable(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.columns.push(Column::new(name, ty, true));
        self
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
