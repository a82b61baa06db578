pub use model_parser_core::catalog::{Catalog, MemoryCatalog};

#[cfg(feature = "sqlite")]
pub use model_parser_driver_sqlite::SqliteCatalog;

use crate::{Error, Result};
use url::Url;

/// A catalog that may be shared across threads.
pub type BoxCatalog = Box<dyn Catalog + Send + Sync>;

/// Opens a catalog from a database URL, picking the driver by scheme.
pub fn connect(url: &str) -> Result<BoxCatalog> {
    let parsed = Url::parse(url).map_err(Error::driver)?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<BoxCatalog> {
    Ok(Box::new(SqliteCatalog::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<BoxCatalog> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
