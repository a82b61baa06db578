use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn descriptor_names_the_model() {
    let user = Fixture::new().parse(USER);
    assert_eq!(user.model, USER);
}

#[test]
fn all_columns_are_fields() {
    let user = Fixture::new().parse(USER);
    assert_eq!(
        keys(&user.fields),
        [
            "id",
            "name",
            "email",
            "email_verified_at",
            "password",
            "remember_token",
            "created_at",
            "updated_at",
            "role",
            "car_id",
        ]
    );
}

#[test]
fn hidden_fields_can_be_ignored() {
    let user = Fixture::new().parse_with(USER, &Options::new().ignore_hidden(true));
    assert_eq!(
        keys(&user.fields),
        [
            "id",
            "name",
            "email",
            "email_verified_at",
            "created_at",
            "updated_at",
            "role",
            "car_id",
        ]
    );
}

#[test]
fn fields_can_be_filtered() {
    let user = Fixture::new().parse_with(USER, &Options::new().filter(["email_verified_at"]));
    assert_eq!(
        keys(&user.fields),
        [
            "id",
            "name",
            "email",
            "password",
            "remember_token",
            "created_at",
            "updated_at",
            "role",
            "car_id",
        ]
    );
}

#[test]
fn filter_and_hidden_combine() {
    let options = Options::new()
        .ignore_hidden(true)
        .filter(["role", "car_id", "password"]);
    let user = Fixture::new().parse_with(USER, &options);
    assert_eq!(
        keys(&user.fields),
        [
            "id",
            "name",
            "email",
            "email_verified_at",
            "created_at",
            "updated_at",
        ]
    );
}

#[test]
fn fields_have_their_type_and_nullability() {
    let user = Fixture::new().parse(USER);

    let expected = [
        ("id", "bigint", false),
        ("name", "string", false),
        ("email", "string", false),
        ("email_verified_at", "datetime", true),
        ("password", "string", false),
        ("remember_token", "string", true),
        ("created_at", "datetime", true),
        ("updated_at", "datetime", true),
        ("role", "integer", false),
        ("car_id", "integer", true),
    ];

    for (name, ty, nullable) in expected {
        let field = &user.fields[name];
        assert_eq!((name, field.ty.as_str(), field.nullable), (name, ty, nullable));
    }
}
