use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn morph_to_keys() {
    let image = Fixture::new().parse(IMAGE);
    let imageable = &image.relations["imageable"];

    assert_eq!(imageable.kind, RelationKind::MorphTo);
    assert_eq!(imageable.model, "Image");
    assert_eq!(
        imageable.keys.entries(),
        [("foreign_key", "imageable_id"), ("morph_type", "imageable_type")]
    );
}

#[test]
fn morph_many_keys() {
    let video = Fixture::new().parse(VIDEO);
    let comments = &video.relations["comments"];

    assert_eq!(comments.kind, RelationKind::MorphMany);
    assert_eq!(comments.model, "Comment");
    assert_eq!(
        comments.keys.entries(),
        [
            ("foreign_key", "commentable_id"),
            ("local_key", "id"),
            ("morph_type", "commentable_type"),
        ]
    );
}

#[test]
fn morph_to_many_keys() {
    let video = Fixture::new().parse(VIDEO);
    assert_eq!(
        video.relations["tags"].keys.entries(),
        [
            ("parent_key", "id"),
            ("related_key", "id"),
            ("pivot_foreign_key", "taggable_id"),
            ("pivot_related_key", "tag_id"),
            ("morph_type", "taggable_type"),
        ]
    );
}

#[test]
fn morph_to_many_pivot_table() {
    let json = Fixture::new().parse_json(VIDEO);
    assert_eq!(
        json["relations"]["tags"]["pivot"],
        json!({
            "table": "taggables",
            "columns": {
                "tag_id": { "type": "bigint", "nullable": false },
                "taggable_type": { "type": "string", "nullable": false },
                "taggable_id": { "type": "bigint", "nullable": false },
            },
        })
    );
}

#[test]
fn morphed_by_many_is_reported_as_morph_to_many() {
    let tag = Fixture::new().parse(TAG);
    let videos = &tag.relations["videos"];

    assert_eq!(videos.kind, RelationKind::MorphToMany);
    assert_eq!(videos.model, "Video");
    assert_eq!(videos.keys.get("pivot_foreign_key"), Some("tag_id"));
    assert_eq!(videos.keys.get("pivot_related_key"), Some("taggable_id"));
    assert_eq!(videos.pivot.as_ref().unwrap().table, "taggables");
}
