use super::Error;

/// Error when a dialect cannot render the requested statement shape.
///
/// This occurs when:
/// - A multi-table UPDATE is compiled for a dialect with neither the
///   correlated `UPDATE .. FROM` form nor the comma-joined multi-table form
/// - A statement writes to a secondary table and the dialect cannot express
///   writes to more than one table
///
/// The compiler never downgrades such a statement to a single-table one.
#[derive(Debug)]
pub(super) struct UnsupportedDialect {
    dialect: Box<str>,
    feature: Box<str>,
}

impl std::error::Error for UnsupportedDialect {}

impl core::fmt::Display for UnsupportedDialect {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported dialect: `{}` does not support {}",
            self.dialect, self.feature
        )
    }
}

impl Error {
    /// Creates an unsupported dialect error.
    pub fn unsupported_dialect(dialect: impl Into<String>, feature: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedDialect(UnsupportedDialect {
            dialect: String::into_boxed_str(dialect.into()),
            feature: String::into_boxed_str(feature.into()),
        }))
    }

    /// Returns `true` if this error is an unsupported dialect error.
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedDialect(_))
    }
}
