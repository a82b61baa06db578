use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn only_typed_relation_methods_are_reported() {
    let user = Fixture::new().parse(USER);

    // `car` has no return type and `latestOrder` returns `HasOneOrMany`
    assert_eq!(keys(&user.relations), ["posts", "accounts", "phone", "image"]);
}

#[test]
fn relations_have_their_type_and_model() {
    let user = Fixture::new().parse(USER);

    let summary: Vec<_> = user
        .relations
        .iter()
        .map(|(name, relation)| (name.as_str(), relation.kind, relation.model.as_str()))
        .collect();

    assert_eq!(
        summary,
        [
            ("posts", RelationKind::HasMany, "Post"),
            ("accounts", RelationKind::BelongsToMany, "Account"),
            ("phone", RelationKind::HasOne, "Phone"),
            ("image", RelationKind::MorphOne, "Image"),
        ]
    );
}

#[test]
fn has_many_keys() {
    let user = Fixture::new().parse(USER);
    assert_eq!(
        user.relations["posts"].keys,
        RelationKeys::HasOneOrMany {
            foreign_key: "user_id".to_string(),
            local_key: "id".to_string(),
        }
    );
}

#[test]
fn has_one_keys() {
    let user = Fixture::new().parse(USER);
    assert_eq!(
        user.relations["phone"].keys.entries(),
        [("foreign_key", "user_id"), ("local_key", "id")]
    );
    assert!(user.relations["phone"].pivot.is_none());
}

#[test]
fn belongs_to_many_keys() {
    let user = Fixture::new().parse(USER);
    assert_eq!(
        user.relations["accounts"].keys.entries(),
        [
            ("pivot_foreign_key", "user_id"),
            ("pivot_related_key", "account_id"),
            ("related_key", "id"),
            ("parent_key", "id"),
        ]
    );
}

#[test]
fn belongs_to_many_pivot_table() {
    let json = Fixture::new().parse_json(USER);
    assert_eq!(
        json["relations"]["accounts"]["pivot"],
        json!({
            "table": "account_user",
            "columns": {
                "id": { "type": "integer", "nullable": false },
                "account_id": { "type": "integer", "nullable": false },
                "user_id": { "type": "integer", "nullable": false },
                "reason": { "type": "string", "nullable": true },
            },
        })
    );
}

#[test]
fn pivot_columns_keep_schema_order() {
    let user = Fixture::new().parse(USER);
    let pivot = user.relations["accounts"].pivot.as_ref().unwrap();
    assert_eq!(keys(&pivot.columns), ["id", "account_id", "user_id", "reason"]);
}

#[test]
fn morph_one_keys() {
    let user = Fixture::new().parse(USER);
    assert_eq!(
        user.relations["image"].keys.entries(),
        [
            ("foreign_key", "imageable_id"),
            ("local_key", "id"),
            ("morph_type", "imageable_type"),
        ]
    );
}

#[test]
fn inverse_belongs_to_many_shares_the_pivot() {
    let account = Fixture::new().parse(ACCOUNT);
    let users = &account.relations["users"];

    assert_eq!(users.model, "User");
    assert_eq!(
        users.keys.entries(),
        [
            ("pivot_foreign_key", "account_id"),
            ("pivot_related_key", "user_id"),
            ("related_key", "id"),
            ("parent_key", "id"),
        ]
    );
    assert_eq!(users.pivot.as_ref().unwrap().table, "account_user");
}
