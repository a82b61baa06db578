use std::fmt;

/// Portable storage types reported for catalog columns.
///
/// Catalogs store whatever the migration declared (`VARCHAR(255)`,
/// `INTEGER`, `timestamp(0) without time zone`, ...). `db::Type` folds those
/// declarations into a small vocabulary of portable type names so that the
/// same model reports the same field types regardless of the database that
/// backs it.
///
/// # Mapping from declared types
///
/// ```text
/// BIGINT                                → bigint
/// INT, INTEGER, MEDIUMINT               → integer
/// SMALLINT, TINYINT                     → smallint
/// BOOLEAN, BOOL                         → boolean
/// VARCHAR(n), CHAR(n), NVARCHAR, STRING → string
/// TEXT, CLOB, TINY/MEDIUM/LONGTEXT      → text
/// DATETIME, TIMESTAMP                   → datetime
/// DATE                                  → date
/// TIME                                  → time
/// FLOAT, DOUBLE, REAL                   → float
/// DECIMAL(p, s), NUMERIC                → decimal
/// BLOB                                  → blob
/// JSON                                  → json
/// UUID, GUID                            → guid
/// ```
///
/// Anything else is kept as a [`Type::Custom`] holding the lower-cased
/// declaration without its size arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    BigInt,
    Integer,
    SmallInt,
    Boolean,

    /// Bounded character data
    String,

    /// Unbounded character data
    Text,

    DateTime,
    Date,
    Time,
    Float,
    Decimal,
    Blob,
    Json,
    Guid,

    /// Declared type with no portable equivalent
    Custom(String),
}

impl Type {
    /// Maps a declared column type, as stored by the database, to its
    /// portable type.
    pub fn from_sql(declared: &str) -> Type {
        let declared = declared.trim().to_ascii_lowercase();

        // Strip size arguments: `varchar(255)` → `varchar`
        let base = match declared.find('(') {
            Some(pos) => declared[..pos].trim_end(),
            None => declared.as_str(),
        };

        // `unsigned big int`, `character varying`, `timestamp without time zone`
        let head = base
            .split_whitespace()
            .find(|word| !matches!(*word, "unsigned" | "signed"))
            .unwrap_or("");

        match head {
            "bigint" | "int8" => Type::BigInt,
            "big" if base.ends_with("int") => Type::BigInt,
            "int" | "integer" | "mediumint" | "int4" => Type::Integer,
            "smallint" | "tinyint" | "int2" => Type::SmallInt,
            "boolean" | "bool" => Type::Boolean,
            "varchar" | "char" | "nvarchar" | "nchar" | "string" | "character" => Type::String,
            "text" | "clob" | "tinytext" | "mediumtext" | "longtext" => Type::Text,
            "datetime" | "timestamp" | "timestamptz" => Type::DateTime,
            "date" => Type::Date,
            "time" => Type::Time,
            "float" | "double" | "real" => Type::Float,
            "decimal" | "numeric" => Type::Decimal,
            "blob" | "binary" | "varbinary" => Type::Blob,
            "json" | "jsonb" => Type::Json,
            "uuid" | "guid" => Type::Guid,
            _ => Type::Custom(base.to_string()),
        }
    }

    /// The portable type name.
    pub fn name(&self) -> &str {
        match self {
            Type::BigInt => "bigint",
            Type::Integer => "integer",
            Type::SmallInt => "smallint",
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Text => "text",
            Type::DateTime => "datetime",
            Type::Date => "date",
            Type::Time => "time",
            Type::Float => "float",
            Type::Decimal => "decimal",
            Type::Blob => "blob",
            Type::Json => "json",
            Type::Guid => "guid",
            Type::Custom(name) => name,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
