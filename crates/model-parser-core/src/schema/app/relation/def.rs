use super::*;
use crate::schema::name;
use serde::Deserialize;

/// A relation method body: the relation constructor it calls and the
/// arguments it passes. Arguments left as `None` are resolved by convention
/// when the relationship is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationDef {
    HasOne(HasOneOrManyDef),
    HasMany(HasOneOrManyDef),
    MorphOne(MorphOneOrManyDef),
    MorphMany(MorphOneOrManyDef),
    BelongsTo(BelongsToDef),
    MorphTo(MorphToDef),
    BelongsToMany(BelongsToManyDef),
    MorphToMany(MorphToManyDef),
    MorphedByMany(MorphToManyDef),
    HasOneThrough(ThroughDef),
    HasManyThrough(ThroughDef),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HasOneOrManyDef {
    pub related: String,
    #[serde(default)]
    pub foreign_key: Option<String>,
    #[serde(default)]
    pub local_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MorphOneOrManyDef {
    pub related: String,

    /// Morph name; `imageable` yields `imageable_type` and `imageable_id`
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub local_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BelongsToDef {
    pub related: String,
    #[serde(default)]
    pub foreign_key: Option<String>,
    #[serde(default)]
    pub owner_key: Option<String>,

    /// Relation name used to derive the foreign key; defaults to the method
    /// name.
    #[serde(default)]
    pub relation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MorphToDef {
    /// Morph name; defaults to the method name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub owner_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BelongsToManyDef {
    pub related: String,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub foreign_pivot_key: Option<String>,
    #[serde(default)]
    pub related_pivot_key: Option<String>,
    #[serde(default)]
    pub parent_key: Option<String>,
    #[serde(default)]
    pub related_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MorphToManyDef {
    pub related: String,
    pub name: String,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub foreign_pivot_key: Option<String>,
    #[serde(default)]
    pub related_pivot_key: Option<String>,
    #[serde(default)]
    pub parent_key: Option<String>,
    #[serde(default)]
    pub related_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThroughDef {
    pub related: String,
    pub through: String,
    #[serde(default)]
    pub first_key: Option<String>,
    #[serde(default)]
    pub second_key: Option<String>,
    #[serde(default)]
    pub local_key: Option<String>,
    #[serde(default)]
    pub second_local_key: Option<String>,
}

impl RelationDef {
    pub fn has_one(related: impl Into<String>) -> Self {
        RelationDef::HasOne(HasOneOrManyDef::new(related))
    }

    pub fn has_many(related: impl Into<String>) -> Self {
        RelationDef::HasMany(HasOneOrManyDef::new(related))
    }

    pub fn morph_one(related: impl Into<String>, name: impl Into<String>) -> Self {
        RelationDef::MorphOne(MorphOneOrManyDef::new(related, name))
    }

    pub fn morph_many(related: impl Into<String>, name: impl Into<String>) -> Self {
        RelationDef::MorphMany(MorphOneOrManyDef::new(related, name))
    }

    pub fn belongs_to(related: impl Into<String>) -> Self {
        RelationDef::BelongsTo(BelongsToDef {
            related: related.into(),
            foreign_key: None,
            owner_key: None,
            relation: None,
        })
    }

    pub fn morph_to() -> Self {
        RelationDef::MorphTo(MorphToDef::default())
    }

    pub fn belongs_to_many(related: impl Into<String>) -> Self {
        RelationDef::BelongsToMany(BelongsToManyDef {
            related: related.into(),
            table: None,
            foreign_pivot_key: None,
            related_pivot_key: None,
            parent_key: None,
            related_key: None,
        })
    }

    pub fn morph_to_many(related: impl Into<String>, name: impl Into<String>) -> Self {
        RelationDef::MorphToMany(MorphToManyDef::new(related, name))
    }

    pub fn morphed_by_many(related: impl Into<String>, name: impl Into<String>) -> Self {
        RelationDef::MorphedByMany(MorphToManyDef::new(related, name))
    }

    pub fn has_one_through(related: impl Into<String>, through: impl Into<String>) -> Self {
        RelationDef::HasOneThrough(ThroughDef::new(related, through))
    }

    pub fn has_many_through(related: impl Into<String>, through: impl Into<String>) -> Self {
        RelationDef::HasManyThrough(ThroughDef::new(related, through))
    }

    /// The kind of relationship this constructor builds.
    pub fn kind(&self) -> RelationKind {
        match self {
            RelationDef::HasOne(_) => RelationKind::HasOne,
            RelationDef::HasMany(_) => RelationKind::HasMany,
            RelationDef::MorphOne(_) => RelationKind::MorphOne,
            RelationDef::MorphMany(_) => RelationKind::MorphMany,
            RelationDef::BelongsTo(_) => RelationKind::BelongsTo,
            RelationDef::MorphTo(_) => RelationKind::MorphTo,
            RelationDef::BelongsToMany(_) => RelationKind::BelongsToMany,
            RelationDef::MorphToMany(_) | RelationDef::MorphedByMany(_) => {
                RelationKind::MorphToMany
            }
            RelationDef::HasOneThrough(_) => RelationKind::HasOneThrough,
            RelationDef::HasManyThrough(_) => RelationKind::HasManyThrough,
        }
    }

    /// Runs the relation constructor against `cx.parent`, resolving default
    /// key names. Fails if a referenced model is not registered.
    pub fn build(&self, cx: &Cx<'_>) -> Result<Relationship> {
        let parent = cx.parent;

        Ok(match self {
            RelationDef::HasOne(def) => Relationship::HasOne(def.build(cx)?),
            RelationDef::HasMany(def) => Relationship::HasMany(def.build(cx)?),
            RelationDef::MorphOne(def) => Relationship::MorphOne(def.build(cx)?),
            RelationDef::MorphMany(def) => Relationship::MorphMany(def.build(cx)?),
            RelationDef::BelongsTo(def) => {
                let related = cx.model(&def.related)?;
                let relation = def.relation.as_deref().unwrap_or(cx.method);

                Relationship::BelongsTo(BelongsTo {
                    related: related.name.clone(),
                    foreign_key: def
                        .foreign_key
                        .clone()
                        .unwrap_or_else(|| format!("{}_{}", name::snake(relation), related.key)),
                    owner_key: def.owner_key.clone().unwrap_or_else(|| related.key.clone()),
                })
            }
            RelationDef::MorphTo(def) => {
                let morph = name::snake(def.name.as_deref().unwrap_or(cx.method));

                Relationship::MorphTo(MorphTo {
                    related: parent.name.clone(),
                    foreign_key: def.id.clone().unwrap_or_else(|| format!("{morph}_id")),
                    morph_type: def.ty.clone().unwrap_or_else(|| format!("{morph}_type")),
                    owner_key: def.owner_key.clone(),
                })
            }
            RelationDef::BelongsToMany(def) => {
                let related = cx.model(&def.related)?;

                Relationship::BelongsToMany(BelongsToMany {
                    related: related.name.clone(),
                    table: def
                        .table
                        .clone()
                        .unwrap_or_else(|| parent.joining_table(related)),
                    foreign_pivot_key: def
                        .foreign_pivot_key
                        .clone()
                        .unwrap_or_else(|| parent.foreign_key()),
                    related_pivot_key: def
                        .related_pivot_key
                        .clone()
                        .unwrap_or_else(|| related.foreign_key()),
                    parent_key: def.parent_key.clone().unwrap_or_else(|| parent.key.clone()),
                    related_key: def
                        .related_key
                        .clone()
                        .unwrap_or_else(|| related.key.clone()),
                })
            }
            RelationDef::MorphToMany(def) => Relationship::MorphToMany(def.build(cx, false)?),
            RelationDef::MorphedByMany(def) => Relationship::MorphToMany(def.build(cx, true)?),
            RelationDef::HasOneThrough(def) => Relationship::HasOneThrough(def.build(cx)?),
            RelationDef::HasManyThrough(def) => Relationship::HasManyThrough(def.build(cx)?),
        })
    }
}

impl HasOneOrManyDef {
    pub fn new(related: impl Into<String>) -> Self {
        Self {
            related: related.into(),
            foreign_key: None,
            local_key: None,
        }
    }

    fn build(&self, cx: &Cx<'_>) -> Result<HasOneOrMany> {
        let related = cx.model(&self.related)?;

        Ok(HasOneOrMany {
            related: related.name.clone(),
            foreign_key: self
                .foreign_key
                .clone()
                .unwrap_or_else(|| cx.parent.foreign_key()),
            local_key: self
                .local_key
                .clone()
                .unwrap_or_else(|| cx.parent.key.clone()),
        })
    }
}

impl MorphOneOrManyDef {
    pub fn new(related: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            related: related.into(),
            name: name.into(),
            ty: None,
            id: None,
            local_key: None,
        }
    }

    fn build(&self, cx: &Cx<'_>) -> Result<MorphOneOrMany> {
        let related = cx.model(&self.related)?;

        Ok(MorphOneOrMany {
            related: related.name.clone(),
            foreign_key: self
                .id
                .clone()
                .unwrap_or_else(|| format!("{}_id", self.name)),
            local_key: self
                .local_key
                .clone()
                .unwrap_or_else(|| cx.parent.key.clone()),
            morph_type: self
                .ty
                .clone()
                .unwrap_or_else(|| format!("{}_type", self.name)),
        })
    }
}

impl MorphToManyDef {
    pub fn new(related: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            related: related.into(),
            name: name.into(),
            table: None,
            foreign_pivot_key: None,
            related_pivot_key: None,
            parent_key: None,
            related_key: None,
        }
    }

    fn build(&self, cx: &Cx<'_>, inverse: bool) -> Result<MorphToMany> {
        let parent = cx.parent;
        let related = cx.model(&self.related)?;
        let morph_id = format!("{}_id", self.name);

        // `morphedByMany` swaps which side of the pivot carries the morph id
        let (foreign_pivot_key, related_pivot_key) = if inverse {
            (parent.foreign_key(), morph_id)
        } else {
            (morph_id, related.foreign_key())
        };

        Ok(MorphToMany {
            related: related.name.clone(),
            table: self
                .table
                .clone()
                .unwrap_or_else(|| name::plural_last_word(&self.name)),
            foreign_pivot_key: self.foreign_pivot_key.clone().unwrap_or(foreign_pivot_key),
            related_pivot_key: self.related_pivot_key.clone().unwrap_or(related_pivot_key),
            parent_key: self.parent_key.clone().unwrap_or_else(|| parent.key.clone()),
            related_key: self
                .related_key
                .clone()
                .unwrap_or_else(|| related.key.clone()),
            morph_type: format!("{}_type", self.name),
            inverse,
        })
    }
}

impl ThroughDef {
    pub fn new(related: impl Into<String>, through: impl Into<String>) -> Self {
        Self {
            related: related.into(),
            through: through.into(),
            first_key: None,
            second_key: None,
            local_key: None,
            second_local_key: None,
        }
    }

    fn build(&self, cx: &Cx<'_>) -> Result<HasManyThrough> {
        let parent = cx.parent;
        let through = cx.model(&self.through)?;
        let related = cx.model(&self.related)?;

        Ok(HasManyThrough {
            related: related.name.clone(),
            through: through.name.clone(),
            first_key: self
                .first_key
                .clone()
                .unwrap_or_else(|| parent.foreign_key()),
            second_key: self
                .second_key
                .clone()
                .unwrap_or_else(|| through.foreign_key()),
            local_key: self.local_key.clone().unwrap_or_else(|| parent.key.clone()),
            second_local_key: self
                .second_local_key
                .clone()
                .unwrap_or_else(|| through.key.clone()),
        })
    }
}
