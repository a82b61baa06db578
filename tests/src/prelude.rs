//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::models::*;
pub use crate::{keys, Fixture};

pub use model_parser::descriptor::{CastedAs, RelationKeys};
pub use model_parser::schema::app::{EnumValue, RelationKind};
pub use model_parser::Options;

pub use pretty_assertions::assert_eq;
pub use serde_json::json;
