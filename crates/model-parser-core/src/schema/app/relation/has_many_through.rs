/// A `HasOneThrough` or `HasManyThrough` relationship: parent → through →
/// related.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasManyThrough {
    pub(crate) related: String,

    /// Intermediate model
    pub(crate) through: String,

    /// Column on the through table referencing the parent
    pub(crate) first_key: String,

    /// Column on the related table referencing the through model
    pub(crate) second_key: String,

    /// Column on the parent table
    pub(crate) local_key: String,

    /// Column on the through table
    pub(crate) second_local_key: String,
}

impl HasManyThrough {
    pub fn related(&self) -> &str {
        &self.related
    }

    pub fn through(&self) -> &str {
        &self.through
    }

    pub fn first_key_name(&self) -> &str {
        &self.first_key
    }

    /// The related table's column referencing the through model.
    pub fn foreign_key_name(&self) -> &str {
        &self.second_key
    }

    pub fn local_key_name(&self) -> &str {
        &self.local_key
    }

    pub fn second_local_key_name(&self) -> &str {
        &self.second_local_key
    }
}
