use super::Error;

/// Error when two distinct bind parameters end up with the same name.
///
/// Bind names are discriminated as they are assigned, so this indicates a bug
/// in the naming logic rather than a problem with the caller's statement.
#[derive(Debug)]
pub(super) struct DuplicateBinding {
    name: Box<str>,
}

impl std::error::Error for DuplicateBinding {}

impl core::fmt::Display for DuplicateBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate bind parameter `{}`", self.name)
    }
}

impl Error {
    /// Creates a duplicate binding error.
    pub fn duplicate_binding(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateBinding(DuplicateBinding {
            name: String::into_boxed_str(name.into()),
        }))
    }

    /// Returns `true` if this error is a duplicate binding error.
    pub fn is_duplicate_binding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateBinding(_))
    }
}
