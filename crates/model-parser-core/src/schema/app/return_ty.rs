use crate::Error;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// A declared return type, e.g. `string`, `?string` or `Status|null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ReturnType {
    /// Type name without the nullability marker
    pub name: String,

    /// True if the declaration admits `null`
    pub nullable: bool,
}

impl ReturnType {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let nullable = is_nullable_by_itself(&name);
        Self { name, nullable }
    }

    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
        }
    }
}

/// Drops the global namespace marker: `\App\Enums\Status` names the same
/// class as `App\Enums\Status`.
fn strip_root(name: &str) -> &str {
    name.strip_prefix('\\').unwrap_or(name)
}

fn is_nullable_by_itself(name: &str) -> bool {
    matches!(name, "mixed" | "null")
}

impl FromStr for ReturnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix('?') {
            let name = strip_root(rest.trim());
            if name.is_empty() || name.contains('|') {
                return Err(Error::invalid_manifest(format!(
                    "malformed return type `{s}`"
                )));
            }
            return Ok(ReturnType::nullable(name));
        }

        let members: Vec<&str> = s.split('|').map(|member| strip_root(member.trim())).collect();

        match members[..] {
            [name] if !name.is_empty() => Ok(ReturnType::new(name)),
            [name, "null"] | ["null", name] if !name.is_empty() && name != "null" => {
                Ok(ReturnType::nullable(name))
            }
            _ => Err(Error::invalid_manifest(format!(
                "unsupported return type `{s}`; only single types and `T|null` unions are supported"
            ))),
        }
    }
}

impl TryFrom<String> for ReturnType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        value.parse()
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable && !is_nullable_by_itself(&self.name) {
            f.write_str("?")?;
        }
        f.write_str(&self.name)
    }
}
