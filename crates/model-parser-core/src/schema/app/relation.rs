//! Relationship declarations and the relationship objects they build.
//!
//! A [`RelationDef`] is what a relation method's body calls (`hasMany`,
//! `belongsToMany`, ...). Invoking the method builds a [`Relationship`], which
//! resolves every key name that the declaration left to convention.

mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod def;
pub use def::{
    BelongsToDef, BelongsToManyDef, HasOneOrManyDef, MorphOneOrManyDef, MorphToDef,
    MorphToManyDef, RelationDef, ThroughDef,
};

mod has_many_through;
pub use has_many_through::HasManyThrough;

mod has_one_or_many;
pub use has_one_or_many::HasOneOrMany;

mod kind;
pub use kind::RelationKind;

mod morph_one_or_many;
pub use morph_one_or_many::MorphOneOrMany;

mod morph_to;
pub use morph_to::MorphTo;

mod morph_to_many;
pub use morph_to_many::MorphToMany;

use super::Model;
use crate::{schema::Registry, Result};

/// The live state a relation method runs against.
#[derive(Debug, Clone, Copy)]
pub struct Cx<'a> {
    /// Models and types the relation may reference
    pub registry: &'a Registry,

    /// The model declaring the relation method
    pub parent: &'a Model,

    /// Name of the relation method being invoked
    pub method: &'a str,
}

impl<'a> Cx<'a> {
    pub fn new(registry: &'a Registry, parent: &'a Model, method: &'a str) -> Self {
        Self {
            registry,
            parent,
            method,
        }
    }

    fn model(&self, name: &str) -> Result<&'a Model> {
        self.registry.model(name)
    }
}

/// A constructed relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    HasOne(HasOneOrMany),
    HasMany(HasOneOrMany),
    BelongsTo(BelongsTo),
    BelongsToMany(BelongsToMany),
    HasOneThrough(HasManyThrough),
    HasManyThrough(HasManyThrough),
    MorphOne(MorphOneOrMany),
    MorphMany(MorphOneOrMany),
    MorphToMany(MorphToMany),
    MorphTo(MorphTo),
}

impl Relationship {
    pub fn kind(&self) -> RelationKind {
        match self {
            Relationship::HasOne(_) => RelationKind::HasOne,
            Relationship::HasMany(_) => RelationKind::HasMany,
            Relationship::BelongsTo(_) => RelationKind::BelongsTo,
            Relationship::BelongsToMany(_) => RelationKind::BelongsToMany,
            Relationship::HasOneThrough(_) => RelationKind::HasOneThrough,
            Relationship::HasManyThrough(_) => RelationKind::HasManyThrough,
            Relationship::MorphOne(_) => RelationKind::MorphOne,
            Relationship::MorphMany(_) => RelationKind::MorphMany,
            Relationship::MorphToMany(_) => RelationKind::MorphToMany,
            Relationship::MorphTo(_) => RelationKind::MorphTo,
        }
    }

    /// Fully qualified identifier of the related model.
    pub fn related(&self) -> &str {
        match self {
            Relationship::HasOne(rel) | Relationship::HasMany(rel) => rel.related(),
            Relationship::BelongsTo(rel) => rel.related(),
            Relationship::BelongsToMany(rel) => rel.related(),
            Relationship::HasOneThrough(rel) | Relationship::HasManyThrough(rel) => rel.related(),
            Relationship::MorphOne(rel) | Relationship::MorphMany(rel) => rel.related(),
            Relationship::MorphToMany(rel) => rel.related(),
            Relationship::MorphTo(rel) => rel.related(),
        }
    }

    /// The intermediate table of a many-to-many relationship.
    pub fn pivot_table(&self) -> Option<&str> {
        match self {
            Relationship::BelongsToMany(rel) => Some(rel.table()),
            Relationship::MorphToMany(rel) => Some(rel.table()),
            _ => None,
        }
    }
}
