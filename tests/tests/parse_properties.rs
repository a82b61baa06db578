use model_parser::schema::app::{Attribute, Method, Model, RelationDef};
use model_parser::{ModelParser, Registry};
use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn top_level_keys() {
    let json = Fixture::new().parse_json(USER);
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["casts", "fields", "model", "mutators", "relations"]);
}

#[test]
fn every_fixture_model_parses() {
    let fixture = Fixture::new();

    for model in [
        USER,
        ACCOUNT,
        POST,
        PHONE,
        CAR,
        IMAGE,
        VIDEO,
        COMMENT,
        TAG,
        MECHANIC,
        PROJECT,
        ENVIRONMENT,
        DEPLOYMENT,
    ] {
        let descriptor = fixture.parse(model);
        assert_eq!(descriptor.model, model);
        assert!(descriptor.fields.contains_key("id"), "{model} has no id field");
    }
}

#[test]
fn relation_keys_match_their_kind() {
    let fixture = Fixture::new();

    for model in [USER, ACCOUNT, IMAGE, VIDEO, TAG, MECHANIC, PROJECT, ENVIRONMENT] {
        for (name, relation) in fixture.parse(model).relations {
            let keys: Vec<_> = relation.keys.entries().into_iter().map(|(key, _)| key).collect();

            let expected: &[&str] = match relation.kind {
                RelationKind::HasOne | RelationKind::HasMany => &["foreign_key", "local_key"],
                RelationKind::MorphOne | RelationKind::MorphMany => {
                    &["foreign_key", "local_key", "morph_type"]
                }
                RelationKind::BelongsTo => &["foreign_key", "owner_key"],
                RelationKind::MorphTo => &["foreign_key", "morph_type"],
                RelationKind::BelongsToMany => &[
                    "pivot_foreign_key",
                    "pivot_related_key",
                    "related_key",
                    "parent_key",
                ],
                RelationKind::MorphToMany => &[
                    "parent_key",
                    "related_key",
                    "pivot_foreign_key",
                    "pivot_related_key",
                    "morph_type",
                ],
                RelationKind::HasOneThrough | RelationKind::HasManyThrough => {
                    &["first_key", "second_key", "local_key", "foreign_key"]
                }
            };

            assert_eq!(keys, expected, "{model}::{name}");
            assert_eq!(relation.pivot.is_some(), relation.kind.has_pivot(), "{model}::{name}");
        }
    }
}

#[test]
fn consecutive_parses_are_equal() {
    let fixture = Fixture::new();
    let options = Options::new().ignore_hidden(true).filter(["car_id"]);

    let first = fixture.parse_with(USER, &options);
    let second = fixture.parse_with(USER, &options);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn unknown_model_fails() {
    let err = Fixture::new()
        .try_parse("App\\Models\\Ghost", &Options::new())
        .unwrap_err();
    assert!(err.is_model_not_found());
}

#[test]
fn model_without_table_fails() {
    let err = Fixture::new()
        .try_parse(ORDER, &Options::new())
        .unwrap_err();
    assert!(err.is_table_not_found());
    assert_eq!(
        err.to_string(),
        "failed to parse model `App\\Models\\Order`: table not found: orders"
    );
}

#[test]
fn accessor_without_getter_fails() {
    let fixture = Fixture::new();

    let mut registry = Registry::with_framework_types();
    registry
        .register(Model::new(USER).with_method(Method::accessor("password", Attribute::set_only())))
        .unwrap();

    let err = ModelParser::new(&registry, &fixture.catalog)
        .parse(USER, &Options::new())
        .unwrap_err();
    assert!(err.is_invalid_model());
    assert!(err
        .to_string()
        .contains("model for table users uses accessor `password` without a getter"));
}

#[test]
fn relation_to_unregistered_model_fails() {
    let fixture = Fixture::new();

    let mut registry = Registry::with_framework_types();
    registry
        .register(Model::new(USER).with_method(Method::relation(
            "posts",
            RelationDef::has_many(POST),
        )))
        .unwrap();

    let err = ModelParser::new(&registry, &fixture.catalog)
        .parse(USER, &Options::new())
        .unwrap_err();
    assert!(err.is_model_not_found());
}
