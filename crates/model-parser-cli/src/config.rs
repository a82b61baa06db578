use std::path::PathBuf;

/// Configuration for model-parser CLI operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the TOML model manifest
    pub manifest_path: PathBuf,

    /// Database holding the model tables: a file path or a `sqlite:` URL
    pub database: Option<String>,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("models.toml"),
            database: None,
            pretty: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manifest path
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Set the database path or URL
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set whether JSON output is pretty-printed
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
