use super::{enum_values, ModelParser};
use crate::{
    descriptor::MutatorInfo,
    schema::{
        app::{Method, MethodBody, Model},
        name,
    },
    Error, Result,
};
use indexmap::IndexMap;

impl ModelParser<'_> {
    /// Getter-backed accessors of the model, keyed by snake-cased attribute
    /// name.
    pub fn extract_mutators(&self, model: &Model) -> Result<IndexMap<String, MutatorInfo>> {
        let mut mutators = IndexMap::new();

        for attribute in model.mutated_attributes() {
            let method_name = name::camelize(&attribute);

            // Legacy `get<Name>Attribute` accessors have no method under the
            // camelized name and contribute nothing.
            let Some(method) = model.method(&method_name) else {
                continue;
            };

            let mutator = self.invoke_accessor(model, &attribute, method)?;

            tracing::trace!(%attribute, ty = %mutator.ty, nullable = mutator.nullable, "mutator");

            mutators.insert(attribute, mutator);
        }

        tracing::debug!(model = %model.name, mutators = mutators.len(), "extracted mutators");

        Ok(mutators)
    }

    fn invoke_accessor(&self, model: &Model, attribute: &str, method: &Method) -> Result<MutatorInfo> {
        let MethodBody::Attribute(accessor) = &method.body else {
            return Err(Error::invalid_model(format!(
                "accessor `{}` does not return an Attribute",
                method.name
            )));
        };

        let Some(getter) = &accessor.get else {
            return Err(Error::invalid_model(format!(
                "model for table {} uses accessor `{attribute}` without a getter; only getter-backed accessors are supported",
                model.table()
            )));
        };

        let Some(returns) = &getter.returns else {
            return Err(Error::invalid_model(format!(
                "unable to determine return type for `{attribute}`; add a return type to the get closure"
            )));
        };

        Ok(MutatorInfo {
            ty: returns.name.clone(),
            nullable: returns.nullable,
            enum_values: self.registry.enum_type(&returns.name).map(enum_values),
        })
    }
}
