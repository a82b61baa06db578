/// A `HasOne` or `HasMany` relationship: the related model holds a foreign
/// key pointing at the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasOneOrMany {
    /// Related model
    pub(crate) related: String,

    /// Column on the related table referencing the parent
    pub(crate) foreign_key: String,

    /// Column on the parent table the foreign key references
    pub(crate) local_key: String,
}

impl HasOneOrMany {
    pub fn related(&self) -> &str {
        &self.related
    }

    pub fn foreign_key_name(&self) -> &str {
        &self.foreign_key
    }

    pub fn local_key_name(&self) -> &str {
        &self.local_key
    }
}
