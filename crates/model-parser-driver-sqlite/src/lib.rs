use model_parser_core::{
    catalog::Catalog,
    err,
    schema::db::{Column, Type},
    Error, Result,
};
use rusqlite::{Connection, OpenFlags};
use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};
use url::Url;

const TABLE_INFO: &str =
    r#"SELECT "name", "type", "notnull", "pk" FROM pragma_table_info(?1) ORDER BY "cid""#;

/// One row of `pragma_table_info`.
struct ColumnInfo {
    name: String,
    declared: String,
    not_null: bool,
    pk: i64,
}

/// A [`Catalog`] reading column metadata from a SQLite database.
#[derive(Debug)]
pub struct SqliteCatalog {
    connection: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Opens the database named by a `sqlite:` URL. `sqlite::memory:` opens
    /// an empty in-memory database.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Opens an existing SQLite database at the specified file path. A
    /// missing file is an error; it is never created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening sqlite catalog");

        let mut flags = OpenFlags::default();
        flags.remove(OpenFlags::SQLITE_OPEN_CREATE);

        let connection = Connection::open_with_flags(path, flags).map_err(|err| {
            Error::driver(err).context(format!(
                "sqlite database {} cannot be opened",
                path.display()
            ))
        })?;
        Ok(Self::from_connection(connection))
    }

    /// Opens the SQLite database at `path`, creating an empty one if the file
    /// does not exist.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "creating sqlite catalog");

        let connection = Connection::open(path).map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    /// Opens an empty in-memory database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    pub fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    /// Runs a batch of SQL statements, such as a schema dump.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection()?.execute_batch(sql).map_err(Error::driver)
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| err!("sqlite catalog connection was poisoned"))
    }

    fn table_info(&self, table: &str) -> Result<Vec<Column>> {
        tracing::trace!(table, "reading table info");

        let connection = self.connection()?;
        let mut stmt = connection.prepare_cached(TABLE_INFO).map_err(Error::driver)?;

        let rows = stmt
            .query_map([table], |row| {
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    declared: row.get(1)?,
                    not_null: row.get(2)?,
                    pk: row.get(3)?,
                })
            })
            .map_err(Error::driver)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver)?;

        // Only the sole primary-key column of a table can alias the rowid; a
        // rowid alias never holds NULL even without a NOT NULL constraint.
        let single_pk = rows.iter().filter(|info| info.pk > 0).count() == 1;

        let columns: Vec<Column> = rows
            .into_iter()
            .map(|info| {
                let rowid =
                    single_pk && info.pk == 1 && info.declared.eq_ignore_ascii_case("integer");
                let nullable = !(info.not_null || rowid);
                Column::new(info.name, Type::from_sql(&info.declared), nullable)
            })
            .collect();

        if columns.is_empty() {
            return Err(Error::table_not_found(table));
        }

        Ok(columns)
    }
}

impl Catalog for SqliteCatalog {
    fn columns(&self, table: &str) -> Result<Vec<String>> {
        Ok(self
            .table_info(table)?
            .into_iter()
            .map(|column| column.name)
            .collect())
    }

    fn column(&self, table: &str, column: &str) -> Result<Column> {
        self.table_info(table)?
            .into_iter()
            .find(|info| info.name == column)
            .ok_or_else(|| Error::column_not_found(table, column))
    }
}
