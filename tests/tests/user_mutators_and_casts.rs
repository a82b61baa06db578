use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn mutators_are_reported_by_snake_case_name() {
    let user = Fixture::new().parse(USER);
    assert_eq!(keys(&user.mutators), ["pirate_name", "reserved_role"]);
}

#[test]
fn mutators_have_their_type_and_nullability() {
    let json = Fixture::new().parse_json(USER);
    assert_eq!(
        json["mutators"]["pirate_name"],
        json!({ "type": "string", "nullable": true })
    );
}

#[test]
fn enum_mutators_list_their_cases() {
    let json = Fixture::new().parse_json(USER);
    assert_eq!(
        json["mutators"]["reserved_role"],
        json!({
            "type": RESERVED_ROLE_ENUM,
            "nullable": false,
            "enum": { "BACKEND": 0, "FRONTEND": 1 },
        })
    );
}

#[test]
fn casts_start_with_the_primary_key() {
    let user = Fixture::new().parse(USER);
    assert_eq!(keys(&user.casts), ["id", "email_verified_at", "role", "name"]);
}

#[test]
fn casts_have_their_type_and_classification() {
    let user = Fixture::new().parse(USER);

    let summary: Vec<_> = user
        .casts
        .iter()
        .map(|(name, cast)| (name.as_str(), cast.ty.as_str(), cast.casted_as))
        .collect();

    assert_eq!(
        summary,
        [
            ("id", "int", CastedAs::Primitive),
            ("email_verified_at", "datetime", CastedAs::Primitive),
            ("role", USER_ROLE_ENUM, CastedAs::Enum),
            (
                "name",
                "Illuminate\\Database\\Eloquent\\Casts\\AsStringable",
                CastedAs::Class
            ),
        ]
    );
}

#[test]
fn enum_casts_list_their_values_in_declaration_order() {
    let user = Fixture::new().parse(USER);
    let values: Vec<_> = user.casts["role"]
        .values
        .as_ref()
        .unwrap()
        .iter()
        .map(|(case, value)| (case.as_str(), value.clone()))
        .collect();

    assert_eq!(
        values,
        [("ADMIN", EnumValue::Int(0)), ("USER", EnumValue::Int(1))]
    );
}

#[test]
fn only_enum_casts_serialize_values() {
    let json = Fixture::new().parse_json(USER);
    assert_eq!(
        json["casts"]["id"],
        json!({ "type": "int", "casted_as": "primitive" })
    );
    assert_eq!(json["casts"]["role"]["values"], json!({ "ADMIN": 0, "USER": 1 }));
}
