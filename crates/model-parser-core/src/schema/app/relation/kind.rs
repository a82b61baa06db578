use serde::Serialize;
use std::fmt;

/// Namespace of the framework's relation classes. Declared return types may
/// name a relation kind bare (`HasMany`) or qualified by this namespace.
pub const RELATIONS_NAMESPACE: &str = "Illuminate\\Database\\Eloquent\\Relations";

/// The closed set of relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationKind {
    HasOne,
    HasMany,
    BelongsTo,
    BelongsToMany,
    HasOneThrough,
    HasManyThrough,
    MorphOne,
    MorphMany,
    MorphToMany,
    MorphTo,
}

impl RelationKind {
    pub const ALL: [RelationKind; 10] = [
        RelationKind::HasOne,
        RelationKind::HasMany,
        RelationKind::BelongsTo,
        RelationKind::BelongsToMany,
        RelationKind::HasOneThrough,
        RelationKind::HasManyThrough,
        RelationKind::MorphOne,
        RelationKind::MorphMany,
        RelationKind::MorphToMany,
        RelationKind::MorphTo,
    ];

    /// Classifies a declared return type. Returns `None` for anything that is
    /// not exactly one of the ten relation kinds, including the abstract
    /// intermediate classes such as `HasOneOrMany`.
    pub fn from_return_type(ty: &str) -> Option<RelationKind> {
        let short = match ty.strip_prefix(RELATIONS_NAMESPACE) {
            Some(rest) => rest.strip_prefix('\\')?,
            None => ty,
        };

        Self::ALL.into_iter().find(|kind| kind.name() == short)
    }

    pub fn name(self) -> &'static str {
        match self {
            RelationKind::HasOne => "HasOne",
            RelationKind::HasMany => "HasMany",
            RelationKind::BelongsTo => "BelongsTo",
            RelationKind::BelongsToMany => "BelongsToMany",
            RelationKind::HasOneThrough => "HasOneThrough",
            RelationKind::HasManyThrough => "HasManyThrough",
            RelationKind::MorphOne => "MorphOne",
            RelationKind::MorphMany => "MorphMany",
            RelationKind::MorphToMany => "MorphToMany",
            RelationKind::MorphTo => "MorphTo",
        }
    }

    /// True for the kinds backed by an intermediate table.
    pub fn has_pivot(self) -> bool {
        matches!(self, RelationKind::BelongsToMany | RelationKind::MorphToMany)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
