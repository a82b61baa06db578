use serde::{Deserialize, Serialize};
use std::fmt;

/// A type name known to the registry.
///
/// Type names that are not registered are treated as primitives (`int`,
/// `datetime`, `array`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// A class that is not an enumeration, e.g. a custom cast class.
    Class(String),

    /// A backed enumeration.
    Enum(EnumType),
}

/// A backed enumeration and its cases, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumType {
    pub name: String,
    pub cases: Vec<EnumCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumCase {
    pub name: String,
    pub value: EnumValue,
}

/// The scalar backing an enum case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Int(i64),
    String(String),
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Class(name) => name,
            TypeDef::Enum(ty) => &ty.name,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            TypeDef::Enum(ty) => Some(ty),
            TypeDef::Class(_) => None,
        }
    }

    pub fn is_enum(&self) -> bool {
        self.as_enum().is_some()
    }
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: vec![],
        }
    }

    /// Appends a case.
    pub fn case(mut self, name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        self.cases.push(EnumCase {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

impl From<EnumType> for TypeDef {
    fn from(value: EnumType) -> Self {
        TypeDef::Enum(value)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Int(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        EnumValue::Int(value.into())
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::String(value)
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Int(value) => write!(f, "{value}"),
            EnumValue::String(value) => f.write_str(value),
        }
    }
}
