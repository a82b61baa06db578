use super::ModelParser;
use crate::{
    descriptor::{FieldInfo, Pivot, RelationInfo, RelationKeys},
    schema::{
        app::{
            relation::Cx, Method, MethodBody, Model, RelationKind, Relationship,
        },
        name,
    },
    Error, Result,
};
use indexmap::IndexMap;

impl ModelParser<'_> {
    /// Relation methods of the model, keyed by method name.
    ///
    /// Only methods declaring one of the ten relation kinds as their return
    /// type are considered. Each is invoked to resolve its keys.
    pub fn extract_relations(&self, model: &Model) -> Result<IndexMap<String, RelationInfo>> {
        let mut relations = IndexMap::new();

        for method in &model.methods {
            let Some(kind) = method
                .return_type_name()
                .and_then(RelationKind::from_return_type)
            else {
                continue;
            };

            let relationship = self
                .invoke_relation(model, method, kind)
                .map_err(|err| err.context(format!("failed to build relation `{}`", method.name)))?;

            let pivot = match relationship.pivot_table() {
                Some(table) => Some(self.pivot(table)?),
                None => None,
            };

            tracing::trace!(
                method = %method.name,
                %kind,
                related = relationship.related(),
                "relation"
            );

            relations.insert(
                method.name.clone(),
                RelationInfo {
                    kind,
                    model: name::short_name(relationship.related()).to_string(),
                    keys: RelationKeys::from(&relationship),
                    pivot,
                },
            );
        }

        tracing::debug!(model = %model.name, relations = relations.len(), "extracted relations");

        Ok(relations)
    }

    fn invoke_relation(
        &self,
        model: &Model,
        method: &Method,
        declared: RelationKind,
    ) -> Result<Relationship> {
        let MethodBody::Relation(def) = &method.body else {
            return Err(Error::invalid_model(format!(
                "method `{}` declares return type `{declared}` but does not build a relation",
                method.name
            )));
        };

        let relationship = def.build(&Cx::new(self.registry, model, &method.name))?;

        if relationship.kind() != declared {
            return Err(Error::invalid_model(format!(
                "method `{}` declares return type `{declared}` but builds a `{}` relation",
                method.name,
                relationship.kind()
            )));
        }

        Ok(relationship)
    }

    fn pivot(&self, table: &str) -> Result<Pivot> {
        let mut columns = IndexMap::new();

        for name in self.catalog.columns(table)? {
            let column = self.catalog.column(table, &name)?;
            columns.insert(name, FieldInfo::from(column));
        }

        Ok(Pivot {
            table: table.to_string(),
            columns,
        })
    }
}

impl From<&Relationship> for RelationKeys {
    fn from(relationship: &Relationship) -> Self {
        match relationship {
            Relationship::HasOne(rel) | Relationship::HasMany(rel) => RelationKeys::HasOneOrMany {
                foreign_key: rel.foreign_key_name().to_string(),
                local_key: rel.local_key_name().to_string(),
            },
            Relationship::MorphOne(rel) | Relationship::MorphMany(rel) => {
                RelationKeys::MorphOneOrMany {
                    foreign_key: rel.foreign_key_name().to_string(),
                    local_key: rel.local_key_name().to_string(),
                    morph_type: rel.morph_type().to_string(),
                }
            }
            Relationship::BelongsTo(rel) => RelationKeys::BelongsTo {
                foreign_key: rel.foreign_key_name().to_string(),
                owner_key: rel.owner_key_name().to_string(),
            },
            Relationship::MorphTo(rel) => RelationKeys::MorphTo {
                foreign_key: rel.foreign_key_name().to_string(),
                morph_type: rel.morph_type().to_string(),
            },
            Relationship::BelongsToMany(rel) => RelationKeys::BelongsToMany {
                pivot_foreign_key: rel.foreign_pivot_key_name().to_string(),
                pivot_related_key: rel.related_pivot_key_name().to_string(),
                related_key: rel.related_key_name().to_string(),
                parent_key: rel.parent_key_name().to_string(),
            },
            Relationship::MorphToMany(rel) => RelationKeys::MorphToMany {
                parent_key: rel.parent_key_name().to_string(),
                related_key: rel.related_key_name().to_string(),
                pivot_foreign_key: rel.foreign_pivot_key_name().to_string(),
                pivot_related_key: rel.related_pivot_key_name().to_string(),
                morph_type: rel.morph_type().to_string(),
            },
            Relationship::HasOneThrough(rel) | Relationship::HasManyThrough(rel) => {
                RelationKeys::Through {
                    first_key: rel.first_key_name().to_string(),
                    second_key: rel.second_local_key_name().to_string(),
                    local_key: rel.local_key_name().to_string(),
                    foreign_key: rel.foreign_key_name().to_string(),
                }
            }
        }
    }
}
