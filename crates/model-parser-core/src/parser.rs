mod casts;
mod fields;
mod mutators;
mod relations;

use crate::{
    descriptor::ModelDescriptor,
    schema::app::{EnumType, EnumValue},
    Catalog, Registry, Result,
};
use indexmap::IndexMap;

/// Options for a single parse.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Drop the model's hidden attributes from the fields
    pub ignore_hidden: bool,

    /// Columns to drop from the fields, regardless of `ignore_hidden`
    pub filter: Vec<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_hidden(mut self, ignore_hidden: bool) -> Self {
        self.ignore_hidden = ignore_hidden;
        self
    }

    /// Adds columns to the field filter.
    pub fn filter<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.extend(columns.into_iter().map(Into::into));
        self
    }
}

/// Builds [`ModelDescriptor`]s from a registry of models and a database
/// catalog.
///
/// The parser holds only shared borrows; separate `parse` calls share no
/// mutable state and produce equal descriptors for equal inputs.
#[derive(Clone, Copy)]
pub struct ModelParser<'a> {
    registry: &'a Registry,
    catalog: &'a dyn Catalog,
}

impl<'a> ModelParser<'a> {
    pub fn new(registry: &'a Registry, catalog: &'a dyn Catalog) -> Self {
        Self { registry, catalog }
    }

    /// Describes the model registered as `identifier`.
    ///
    /// Any failure aborts the parse; there is no partial descriptor.
    pub fn parse(&self, identifier: &str, options: &Options) -> Result<ModelDescriptor> {
        self.parse_model(identifier, options)
            .map_err(|err| err.context(format!("failed to parse model `{identifier}`")))
    }

    fn parse_model(&self, identifier: &str, options: &Options) -> Result<ModelDescriptor> {
        let model = self.registry.model(identifier)?;

        tracing::debug!(model = identifier, table = %model.table(), "parsing model");

        let fields = self.extract_fields(model, options.ignore_hidden, &options.filter)?;
        let relations = self.extract_relations(model)?;
        let mutators = self.extract_mutators(model)?;
        let casts = self.extract_casts(model);

        Ok(ModelDescriptor {
            model: identifier.to_string(),
            fields,
            relations,
            mutators,
            casts,
        })
    }
}

impl std::fmt::Debug for ModelParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelParser")
            .field("registry", self.registry)
            .finish_non_exhaustive()
    }
}

/// Case name → scalar, in declaration order.
fn enum_values(ty: &EnumType) -> IndexMap<String, EnumValue> {
    ty.cases
        .iter()
        .map(|case| (case.name.clone(), case.value.clone()))
        .collect()
}
