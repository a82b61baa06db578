/// A polymorphic many-to-many relationship. The pivot table records the
/// morph type next to the pivot keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphToMany {
    pub(crate) related: String,
    pub(crate) table: String,
    pub(crate) foreign_pivot_key: String,
    pub(crate) related_pivot_key: String,
    pub(crate) parent_key: String,
    pub(crate) related_key: String,
    pub(crate) morph_type: String,

    /// True when built by `morphedByMany`
    pub(crate) inverse: bool,
}

impl MorphToMany {
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

    pub fn morph_type(&self) -> &str {
        &self.morph_type
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }
}
