use super::ReturnType;
use serde::Deserialize;

/// The value returned by an `Attribute` accessor method: an optional getter
/// closure and an optional setter closure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Attribute {
    #[serde(default)]
    pub get: Option<Getter>,

    /// True if the accessor also defines a setter.
    #[serde(default)]
    pub set: bool,
}

/// A getter closure. Only its declared return type is observable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Getter {
    #[serde(default)]
    pub returns: Option<ReturnType>,
}

impl Attribute {
    /// An accessor whose getter declares `returns`.
    pub fn get(returns: ReturnType) -> Self {
        Self {
            get: Some(Getter {
                returns: Some(returns),
            }),
            set: false,
        }
    }

    /// An accessor whose getter declares no return type.
    pub fn untyped_get() -> Self {
        Self {
            get: Some(Getter { returns: None }),
            set: false,
        }
    }

    /// A write-only accessor.
    pub fn set_only() -> Self {
        Self {
            get: None,
            set: true,
        }
    }
}
