mod capability;
pub use capability::Capability;

mod param_style;
pub use param_style::ParamStyle;

mod quoting;
pub use quoting::Quoting;

/// Everything the compiler needs to know about a database's SQL dialect.
///
/// The built-in dialects are constants; custom ones are usually derived
/// from a built-in with struct update syntax:
///
/// ```
/// use quill_sql::{Dialect, ParamStyle};
///
/// let dialect = Dialect {
///     name: "psycopg2",
///     param_style: ParamStyle::Pyformat,
///     ..Dialect::POSTGRESQL
/// };
/// assert!(dialect.capability.correlated_from_update);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub name: &'static str,

    /// Statement shapes the database accepts
    pub capability: Capability,

    /// Identifier quoting rules
    pub quoting: Quoting,

    /// How bind parameters are written
    pub param_style: ParamStyle,
}

impl Dialect {
    /// Generic dialect: `UPDATE .. FROM`, `:name` parameters.
    pub const DEFAULT: Dialect = Dialect {
        name: "default",
        capability: Capability::DEFAULT,
        quoting: Quoting::ANSI,
        param_style: ParamStyle::Named,
    };

    pub const POSTGRESQL: Dialect = Dialect {
        name: "postgresql",
        capability: Capability::POSTGRESQL,
        param_style: ParamStyle::Numeric,
        ..Self::DEFAULT
    };

    pub const SQLITE: Dialect = Dialect {
        name: "sqlite",
        capability: Capability::SQLITE,
        param_style: ParamStyle::Qmark,
        ..Self::DEFAULT
    };

    pub const MYSQL: Dialect = Dialect {
        name: "mysql",
        capability: Capability::MYSQL,
        quoting: Quoting::MYSQL,
        param_style: ParamStyle::Format,
    };

    /// Plain SQL-92: single-table UPDATE only.
    pub const ANSI: Dialect = Dialect {
        name: "ansi",
        capability: Capability::ANSI,
        ..Self::DEFAULT
    };

    /// Looks up a built-in dialect by name.
    pub fn from_name(name: &str) -> Option<&'static Dialect> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(&Self::DEFAULT),
            "postgresql" | "postgres" => Some(&Self::POSTGRESQL),
            "sqlite" => Some(&Self::SQLITE),
            "mysql" | "mariadb" => Some(&Self::MYSQL),
            "ansi" => Some(&Self::ANSI),
            _ => None,
        }
    }
}
