mod models;
pub use models::*;

pub mod prelude;

use model_parser::catalog::SqliteCatalog;
use model_parser::{ModelDescriptor, ModelParser, Options, Registry, Result};
use std::sync::Once;

/// Migrated schema of the fixture application.
pub const SCHEMA: &str = include_str!("schema.sql");

/// The fixture registry and a SQLite catalog holding its migrated schema.
pub struct Fixture {
    pub registry: Registry,
    pub catalog: SqliteCatalog,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();

        let catalog = SqliteCatalog::in_memory().unwrap();
        catalog.execute_batch(SCHEMA).unwrap();

        Self {
            registry: registry(),
            catalog,
        }
    }

    pub fn parser(&self) -> ModelParser<'_> {
        ModelParser::new(&self.registry, &self.catalog)
    }

    pub fn try_parse(&self, model: &str, options: &Options) -> Result<ModelDescriptor> {
        self.parser().parse(model, options)
    }

    /// Parses `model` with default options.
    pub fn parse(&self, model: &str) -> ModelDescriptor {
        self.parse_with(model, &Options::new())
    }

    pub fn parse_with(&self, model: &str, options: &Options) -> ModelDescriptor {
        self.try_parse(model, options)
            .unwrap_or_else(|err| panic!("failed to parse {model}: {err}"))
    }

    /// Parses `model` and serializes the descriptor.
    pub fn parse_json(&self, model: &str) -> serde_json::Value {
        serde_json::to_value(self.parse(model)).unwrap()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes `tracing` output through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Keys of a map, in order.
pub fn keys<V>(map: &indexmap::IndexMap<String, V>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}
