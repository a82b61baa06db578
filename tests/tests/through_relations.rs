use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn has_one_through_keys() {
    let mechanic = Fixture::new().parse(MECHANIC);
    let car_owner = &mechanic.relations["carOwner"];

    assert_eq!(car_owner.kind, RelationKind::HasOneThrough);
    assert_eq!(car_owner.model, "User");
    assert_eq!(
        car_owner.keys,
        RelationKeys::Through {
            first_key: "mechanic_id".to_string(),
            second_key: "id".to_string(),
            local_key: "id".to_string(),
            foreign_key: "car_id".to_string(),
        }
    );
}

#[test]
fn has_many_through_keys() {
    let project = Fixture::new().parse(PROJECT);

    assert_eq!(keys(&project.relations), ["deployments", "environments"]);

    let deployments = &project.relations["deployments"];
    assert_eq!(deployments.kind, RelationKind::HasManyThrough);
    assert_eq!(deployments.model, "Deployment");
    assert_eq!(
        deployments.keys.entries(),
        [
            ("first_key", "project_id"),
            ("second_key", "id"),
            ("local_key", "id"),
            ("foreign_key", "environment_id"),
        ]
    );
    assert!(deployments.pivot.is_none());
}
