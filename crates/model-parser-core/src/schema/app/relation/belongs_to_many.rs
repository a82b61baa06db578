/// A many-to-many relationship through an intermediate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsToMany {
    pub(crate) related: String,

    /// Intermediate table
    pub(crate) table: String,

    /// Pivot column referencing the parent
    pub(crate) foreign_pivot_key: String,

    /// Pivot column referencing the related model
    pub(crate) related_pivot_key: String,

    pub(crate) parent_key: String,
    pub(crate) related_key: String,
}

impl BelongsToMany {
    pub fn related(&self) -> &str {
        &self.related
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn foreign_pivot_key_name(&self) -> &str {
        &self.foreign_pivot_key
    }

    pub fn related_pivot_key_name(&self) -> &str {
        &self.related_pivot_key
    }

    pub fn parent_key_name(&self) -> &str {
        &self.parent_key
    }

    pub fn related_key_name(&self) -> &str {
        &self.related_key
    }
}
