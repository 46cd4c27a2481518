use super::Error;

/// Error when a bare column name matches columns in more than one table
/// referenced by the statement.
///
/// Raised instead of picking one of the candidate tables.
#[derive(Debug)]
pub(super) struct AmbiguousColumn {
    column: Box<str>,
    tables: Box<[String]>,
}

impl std::error::Error for AmbiguousColumn {}

impl core::fmt::Display for AmbiguousColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "ambiguous column: `{}` matches tables {}",
            self.column,
            self.tables.join(", ")
        )
    }
}

impl Error {
    /// Creates an ambiguous column error listing every matching table.
    pub fn ambiguous_column(
        column: impl Into<String>,
        tables: impl IntoIterator<Item = impl Into<String>>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousColumn(AmbiguousColumn {
            column: String::into_boxed_str(column.into()),
            tables: tables.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is an ambiguous column error.
    pub fn is_ambiguous_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousColumn(_))
    }
}
