use anyhow::{Context, Result};
use model_parser::catalog::{self, BoxCatalog, SqliteCatalog};

/// Opens the catalog for `database`: a `sqlite:` URL, or else the path of a
/// SQLite file. The database must already exist.
pub(crate) fn open_catalog(database: &str) -> Result<BoxCatalog> {
    let catalog = if database.starts_with("sqlite:") {
        catalog::connect(database)
    } else {
        SqliteCatalog::open(database).map(|catalog| Box::new(catalog) as BoxCatalog)
    };

    let catalog = catalog.with_context(|| format!("failed to open database {database}"))?;

    tracing::debug!(%database, "opened catalog");

    Ok(catalog)
}
