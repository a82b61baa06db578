/// The inverse of a polymorphic relationship. Until a row is loaded the
/// target type is unknown, so the related model is the declaring model
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphTo {
    pub(crate) related: String,
    pub(crate) foreign_key: String,
    pub(crate) morph_type: String,
    pub(crate) owner_key: Option<String>,
}

impl MorphTo {
    pub fn related(&self) -> &str {
        &self.related
    }

    pub fn foreign_key_name(&self) -> &str {
        &self.foreign_key
    }

    pub fn morph_type(&self) -> &str {
        &self.morph_type
    }

    /// Explicit owner key, if the declaration named one.
    pub fn owner_key_name(&self) -> Option<&str> {
        self.owner_key.as_deref()
    }
}
