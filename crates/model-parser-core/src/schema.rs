pub mod app;

pub mod db;

pub mod name;

use crate::{Error, Result};
use app::{EnumType, Model, TypeDef};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Cast and accessor classes the framework itself provides.
pub const FRAMEWORK_CLASSES: [&str; 8] = [
    "Illuminate\\Database\\Eloquent\\Casts\\AsArrayObject",
    "Illuminate\\Database\\Eloquent\\Casts\\AsCollection",
    "Illuminate\\Database\\Eloquent\\Casts\\AsEncryptedArrayObject",
    "Illuminate\\Database\\Eloquent\\Casts\\AsEncryptedCollection",
    "Illuminate\\Database\\Eloquent\\Casts\\AsEnumArrayObject",
    "Illuminate\\Database\\Eloquent\\Casts\\AsEnumCollection",
    "Illuminate\\Database\\Eloquent\\Casts\\AsStringable",
    "Illuminate\\Database\\Eloquent\\Casts\\Attribute",
];

/// The set of models and types a parse can see.
///
/// Looking a model up stands in for instantiating it; looking a type name up
/// stands in for asking whether a class exists and whether it is an enum.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    models: IndexMap<String, Model>,
    types: IndexMap<String, TypeDef>,
}

/// On-disk layout of a model manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    classes: Vec<String>,

    #[serde(default)]
    enums: Vec<EnumType>,

    #[serde(default)]
    models: Vec<Model>,
}

impl Registry {
    /// An empty registry. No type names are known.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that knows the framework's built-in cast classes.
    pub fn with_framework_types() -> Self {
        let mut registry = Self::new();
        for class in FRAMEWORK_CLASSES {
            registry.register_type(TypeDef::Class(class.to_string()));
        }
        registry
    }

    /// Parses a TOML manifest on top of the framework types.
    pub fn from_toml(src: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(src).map_err(|err| Error::invalid_manifest(err.to_string()))?;

        let mut registry = Self::with_framework_types();

        for class in manifest.classes {
            registry.register_type(TypeDef::Class(class));
        }

        for ty in manifest.enums {
            registry.register_type(ty);
        }

        for model in manifest.models {
            registry.register(model)?;
        }

        tracing::debug!(
            models = registry.models.len(),
            types = registry.types.len(),
            "loaded model manifest"
        );

        Ok(registry)
    }

    /// Reads and parses a TOML manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err).context(format!("failed to read manifest {}", path.display()))
        })?;
        Self::from_toml(&src)
    }

    /// Registers a model. Identifiers must be unique, and so must the method
    /// names within the model.
    pub fn register(&mut self, model: Model) -> Result<()> {
        if self.models.contains_key(&model.name) {
            return Err(Error::invalid_manifest(format!(
                "model `{}` is registered twice",
                model.name
            )));
        }

        for (i, method) in model.methods.iter().enumerate() {
            if model.methods[..i].iter().any(|prev| prev.name == method.name) {
                return Err(Error::invalid_manifest(format!(
                    "model `{}` declares method `{}` twice",
                    model.name, method.name
                )));
            }
        }

        self.models.insert(model.name.clone(), model);
        Ok(())
    }

    /// Registers a class or enum. A later registration under the same name
    /// replaces the earlier one.
    pub fn register_type(&mut self, ty: impl Into<TypeDef>) {
        let ty = ty.into();
        self.types.insert(ty.name().to_string(), ty);
    }

    /// Looks a model up by its identifier.
    pub fn model(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| Error::model_not_found(name))
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Looks a type up by exact name.
    pub fn ty(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Looks an enum up by exact name.
    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.ty(name).and_then(TypeDef::as_enum)
    }
}
