/// The inverse of `HasOne`/`HasMany`: the parent holds the foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    /// Model that owns the relation
    pub(crate) related: String,

    /// Column on the parent table
    pub(crate) foreign_key: String,

    /// Column on the related table the foreign key references
    pub(crate) owner_key: String,
}

impl BelongsTo {
    pub fn related(&self) -> &str {
        &self.related
    }

    pub fn foreign_key_name(&self) -> &str {
        &self.foreign_key
    }

    pub fn owner_key_name(&self) -> &str {
        &self.owner_key
    }
}
