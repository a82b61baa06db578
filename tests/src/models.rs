use model_parser::schema::app::{Attribute, EnumType, Method, Model, RelationDef, ReturnType};
use model_parser::Registry;

pub const USER: &str = "App\\Models\\User";
pub const ACCOUNT: &str = "App\\Models\\Account";
pub const POST: &str = "App\\Models\\Post";
pub const PHONE: &str = "App\\Models\\Phone";
pub const CAR: &str = "App\\Models\\Car";
pub const ORDER: &str = "App\\Models\\Order";
pub const IMAGE: &str = "App\\Models\\Image";
pub const VIDEO: &str = "App\\Models\\Video";
pub const COMMENT: &str = "App\\Models\\Comment";
pub const TAG: &str = "App\\Models\\Tag";
pub const MECHANIC: &str = "App\\Models\\Mechanic";
pub const PROJECT: &str = "App\\Models\\Project";
pub const ENVIRONMENT: &str = "App\\Models\\Environment";
pub const DEPLOYMENT: &str = "App\\Models\\Deployment";

pub const USER_ROLE_ENUM: &str = "App\\Enums\\UserRoleEnum";
pub const RESERVED_ROLE_ENUM: &str = "App\\Enums\\ReservedRoleEnum";

/// The fixture application: every model and enum the integration tests
/// parse.
pub fn registry() -> Registry {
    let mut registry = Registry::with_framework_types();

    registry.register_type(EnumType::new(USER_ROLE_ENUM).case("ADMIN", 0).case("USER", 1));
    registry.register_type(
        EnumType::new(RESERVED_ROLE_ENUM)
            .case("BACKEND", 0)
            .case("FRONTEND", 1),
    );

    for model in [
        user(),
        account(),
        image(),
        video(),
        tag(),
        mechanic(),
        project(),
        environment(),
        Model::new(POST),
        Model::new(PHONE),
        Model::new(CAR),
        Model::new(ORDER),
        Model::new(COMMENT),
        Model::new(DEPLOYMENT),
    ] {
        registry
            .register(model)
            .unwrap_or_else(|err| panic!("invalid fixture model: {err}"));
    }

    registry
}

fn user() -> Model {
    Model::new(USER)
        .with_hidden(["password", "remember_token"])
        .with_cast("email_verified_at", "datetime")
        .with_cast("role", USER_ROLE_ENUM)
        .with_cast("name", "Illuminate\\Database\\Eloquent\\Casts\\AsStringable")
        .with_method(Method::relation("posts", RelationDef::has_many(POST)))
        .with_method(Method::accessor(
            "pirateName",
            Attribute::get(ReturnType::nullable("string")),
        ))
        .with_method(Method::accessor(
            "reservedRole",
            Attribute::get(ReturnType::new(RESERVED_ROLE_ENUM)),
        ))
        .with_method(Method::relation(
            "accounts",
            RelationDef::belongs_to_many(ACCOUNT),
        ))
        .with_method(Method::relation("phone", RelationDef::has_one(PHONE)))
        .with_method(Method::relation(
            "image",
            RelationDef::morph_one(IMAGE, "imageable"),
        ))
        // No return type: invisible to the relation extractor
        .with_method(Method::relation("car", RelationDef::has_one(CAR)).untyped())
        .with_method(
            Method::relation("latestOrder", RelationDef::has_one(ORDER))
                .returning(ReturnType::new("HasOneOrMany")),
        )
}

fn account() -> Model {
    Model::new(ACCOUNT)
        .with_method(Method::relation("users", RelationDef::belongs_to_many(USER)))
        .with_method(Method::accessor(
            "pirateName",
            Attribute::get(ReturnType::nullable("string")),
        ))
}

fn image() -> Model {
    Model::new(IMAGE).with_method(Method::relation("imageable", RelationDef::morph_to()))
}

fn video() -> Model {
    Model::new(VIDEO)
        .with_method(Method::relation(
            "comments",
            RelationDef::morph_many(COMMENT, "commentable"),
        ))
        .with_method(Method::relation(
            "tags",
            RelationDef::morph_to_many(TAG, "taggable"),
        ))
}

fn tag() -> Model {
    Model::new(TAG).with_method(Method::relation(
        "videos",
        RelationDef::morphed_by_many(VIDEO, "taggable"),
    ))
}

fn mechanic() -> Model {
    Model::new(MECHANIC).with_method(Method::relation(
        "carOwner",
        RelationDef::has_one_through(USER, CAR),
    ))
}

fn project() -> Model {
    Model::new(PROJECT)
        .with_method(Method::relation(
            "deployments",
            RelationDef::has_many_through(DEPLOYMENT, ENVIRONMENT),
        ))
        .with_method(Method::relation(
            "environments",
            RelationDef::has_many(ENVIRONMENT),
        ))
}

fn environment() -> Model {
    Model::new(ENVIRONMENT).with_method(Method::relation(
        "deployments",
        RelationDef::has_many(DEPLOYMENT),
    ))
}
