/// A polymorphic `MorphOne` or `MorphMany` relationship. The related table
/// records the parent's key alongside the parent's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphOneOrMany {
    pub(crate) related: String,
    pub(crate) foreign_key: String,
    pub(crate) local_key: String,

    /// Column on the related table holding the parent's type
    pub(crate) morph_type: String,
}

impl MorphOneOrMany {
    pub fn related(&self) -> &str {
        &self.related
    }

    pub fn foreign_key_name(&self) -> &str {
        &self.foreign_key
    }

    pub fn local_key_name(&self) -> &str {
        &self.local_key
    }

    pub fn morph_type(&self) -> &str {
        &self.morph_type
    }
}
