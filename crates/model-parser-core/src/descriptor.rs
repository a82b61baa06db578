//! The structured description produced by a parse.

use crate::schema::app::{EnumValue, RelationKind};
use indexmap::IndexMap;
use serde::Serialize;

/// Shape of one model. Serializes with the keys `model`, `fields`,
/// `relations`, `mutators` and `casts`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// The identifier the parse was asked for
    pub model: String,

    /// Persisted columns, in schema order
    pub fields: IndexMap<String, FieldInfo>,

    /// Relation method name → relation
    pub relations: IndexMap<String, RelationInfo>,

    /// Snake-cased accessor name → accessor
    pub mutators: IndexMap<String, MutatorInfo>,

    /// Attribute → cast
    pub casts: IndexMap<String, CastInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// Portable SQL type name
    #[serde(rename = "type")]
    pub ty: String,

    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationInfo {
    #[serde(rename = "type")]
    pub kind: RelationKind,

    /// Short identifier of the related model
    pub model: String,

    pub keys: RelationKeys,

    /// Present only for many-to-many relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Pivot>,
}

/// Intermediate table of a many-to-many relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pivot {
    pub table: String,
    pub columns: IndexMap<String, FieldInfo>,
}

/// Join keys of a relation. Each variant carries exactly the key set of the
/// relation kinds it covers and serializes as a flat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelationKeys {
    /// `HasOne`, `HasMany`
    HasOneOrMany {
        foreign_key: String,
        local_key: String,
    },

    /// `MorphOne`, `MorphMany`
    MorphOneOrMany {
        foreign_key: String,
        local_key: String,
        morph_type: String,
    },

    BelongsTo {
        foreign_key: String,
        owner_key: String,
    },

    MorphTo {
        foreign_key: String,
        morph_type: String,
    },

    BelongsToMany {
        pivot_foreign_key: String,
        pivot_related_key: String,
        related_key: String,
        parent_key: String,
    },

    MorphToMany {
        parent_key: String,
        related_key: String,
        pivot_foreign_key: String,
        pivot_related_key: String,
        morph_type: String,
    },

    /// `HasOneThrough`, `HasManyThrough`
    Through {
        first_key: String,
        second_key: String,
        local_key: String,
        foreign_key: String,
    },
}

impl RelationKeys {
    /// `(key, column)` pairs in serialization order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        match self {
            RelationKeys::HasOneOrMany {
                foreign_key,
                local_key,
            } => vec![("foreign_key", foreign_key), ("local_key", local_key)],
            RelationKeys::MorphOneOrMany {
                foreign_key,
                local_key,
                morph_type,
            } => vec![
                ("foreign_key", foreign_key),
                ("local_key", local_key),
                ("morph_type", morph_type),
            ],
            RelationKeys::BelongsTo {
                foreign_key,
                owner_key,
            } => vec![("foreign_key", foreign_key), ("owner_key", owner_key)],
            RelationKeys::MorphTo {
                foreign_key,
                morph_type,
            } => vec![("foreign_key", foreign_key), ("morph_type", morph_type)],
            RelationKeys::BelongsToMany {
                pivot_foreign_key,
                pivot_related_key,
                related_key,
                parent_key,
            } => vec![
                ("pivot_foreign_key", pivot_foreign_key),
                ("pivot_related_key", pivot_related_key),
                ("related_key", related_key),
                ("parent_key", parent_key),
            ],
            RelationKeys::MorphToMany {
                parent_key,
                related_key,
                pivot_foreign_key,
                pivot_related_key,
                morph_type,
            } => vec![
                ("parent_key", parent_key),
                ("related_key", related_key),
                ("pivot_foreign_key", pivot_foreign_key),
                ("pivot_related_key", pivot_related_key),
                ("morph_type", morph_type),
            ],
            RelationKeys::Through {
                first_key,
                second_key,
                local_key,
                foreign_key,
            } => vec![
                ("first_key", first_key),
                ("second_key", second_key),
                ("local_key", local_key),
                ("foreign_key", foreign_key),
            ],
        }
        .into_iter()
        .map(|(key, column)| (key, column.as_str()))
        .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, column)| column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutatorInfo {
    /// Declared return type of the getter
    #[serde(rename = "type")]
    pub ty: String,

    pub nullable: bool,

    /// Cases of the return type, when it is an enum
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<IndexMap<String, EnumValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastInfo {
    /// The cast target, verbatim
    #[serde(rename = "type")]
    pub ty: String,

    pub casted_as: CastedAs,

    /// Cases of the target, when it is an enum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<IndexMap<String, EnumValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastedAs {
    Primitive,
    Class,
    Enum,
}
