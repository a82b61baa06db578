use super::{enum_values, ModelParser};
use crate::{
    descriptor::{CastInfo, CastedAs},
    schema::app::{Model, TypeDef},
};
use indexmap::IndexMap;

impl ModelParser<'_> {
    /// Effective casts of the model, classified by their target.
    ///
    /// Unregistered targets (`int`, `datetime`, `array`, ...) are primitives.
    pub fn extract_casts(&self, model: &Model) -> IndexMap<String, CastInfo> {
        let casts: IndexMap<_, _> = model
            .casts()
            .into_iter()
            .map(|(attribute, target)| {
                let (casted_as, values) = match self.registry.ty(&target) {
                    None => (CastedAs::Primitive, None),
                    Some(TypeDef::Class(_)) => (CastedAs::Class, None),
                    Some(TypeDef::Enum(ty)) => (CastedAs::Enum, Some(enum_values(ty))),
                };

                let cast = CastInfo {
                    ty: target,
                    casted_as,
                    values,
                };
                (attribute, cast)
            })
            .collect();

        tracing::debug!(model = %model.name, casts = casts.len(), "extracted casts");

        casts
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::MemoryCatalog,
        descriptor::CastedAs,
        schema::app::{EnumType, EnumValue, Model},
        ModelParser, Registry,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_each_cast() {
        let mut registry = Registry::with_framework_types();
        registry.register_type(
            EnumType::new("App\\Enums\\UserRoleEnum")
                .case("ADMIN", 0)
                .case("USER", 1),
        );

        let user = Model::new("App\\Models\\User")
            .with_cast("email_verified_at", "datetime")
            .with_cast("role", "App\\Enums\\UserRoleEnum")
            .with_cast("name", "Illuminate\\Database\\Eloquent\\Casts\\AsStringable");

        let catalog = MemoryCatalog::new();
        let parser = ModelParser::new(&registry, &catalog);
        let casts = parser.extract_casts(&user);

        let summary: Vec<_> = casts
            .iter()
            .map(|(attribute, cast)| (attribute.as_str(), cast.casted_as))
            .collect();
        assert_eq!(
            summary,
            [
                ("id", CastedAs::Primitive),
                ("email_verified_at", CastedAs::Primitive),
                ("role", CastedAs::Enum),
                ("name", CastedAs::Class),
            ]
        );

        assert_eq!(casts["id"].ty, "int");
        assert!(casts["name"].values.is_none());

        let values = casts["role"].values.as_ref().unwrap();
        assert_eq!(values["ADMIN"], EnumValue::Int(0));
        assert_eq!(values["USER"], EnumValue::Int(1));
    }

    #[test]
    fn string_backed_enum_values() {
        let mut registry = Registry::new();
        registry.register_type(
            EnumType::new("App\\Enums\\Status")
                .case("Draft", "draft")
                .case("Published", "published"),
        );

        let post = Model::new("App\\Models\\Post")
            .non_incrementing()
            .with_cast("status", "App\\Enums\\Status");

        let catalog = MemoryCatalog::new();
        let parser = ModelParser::new(&registry, &catalog);
        let casts = parser.extract_casts(&post);

        assert_eq!(casts.len(), 1);
        let values = casts["status"].values.as_ref().unwrap();
        assert_eq!(
            values.values().cloned().collect::<Vec<_>>(),
            [EnumValue::from("draft"), EnumValue::from("published")]
        );
    }
}
