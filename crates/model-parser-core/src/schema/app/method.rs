use super::{Attribute, RelationDef, ReturnType};
use crate::Error;
use serde::Deserialize;

/// A method declared on a model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "MethodManifest")]
pub struct Method {
    pub name: String,

    /// The declared return type. `None` when the method has no annotation.
    pub returns: Option<ReturnType>,

    pub body: MethodBody,
}

/// What calling the method produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// Calls a relation constructor
    Relation(RelationDef),

    /// Returns an `Attribute` accessor
    Attribute(Attribute),

    /// Anything else
    Plain,
}

impl Method {
    /// A relation method annotated with the kind its constructor builds.
    pub fn relation(name: impl Into<String>, def: RelationDef) -> Self {
        Self {
            name: name.into(),
            returns: Some(ReturnType::new(def.kind().name())),
            body: MethodBody::Relation(def),
        }
    }

    /// An accessor method annotated as returning `Attribute`.
    pub fn accessor(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            returns: Some(ReturnType::new("Attribute")),
            body: MethodBody::Attribute(attribute),
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: None,
            body: MethodBody::Plain,
        }
    }

    /// Replaces the declared return type.
    pub fn returning(mut self, returns: ReturnType) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Drops the return type annotation.
    pub fn untyped(mut self) -> Self {
        self.returns = None;
        self
    }

    pub fn return_type_name(&self) -> Option<&str> {
        self.returns.as_ref().map(|returns| returns.name.as_str())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MethodManifest {
    name: String,
    #[serde(default)]
    returns: Option<ReturnType>,
    #[serde(default)]
    relation: Option<RelationDef>,
    #[serde(default)]
    attribute: Option<Attribute>,
}

impl TryFrom<MethodManifest> for Method {
    type Error = Error;

    fn try_from(manifest: MethodManifest) -> Result<Self, Error> {
        let body = match (manifest.relation, manifest.attribute) {
            (Some(_), Some(_)) => {
                return Err(Error::invalid_manifest(format!(
                    "method `{}` declares both a relation and an attribute",
                    manifest.name
                )))
            }
            (Some(relation), None) => MethodBody::Relation(relation),
            (None, Some(attribute)) => MethodBody::Attribute(attribute),
            (None, None) => MethodBody::Plain,
        };

        Ok(Method {
            name: manifest.name,
            returns: manifest.returns,
            body,
        })
    }
}
