/// Bind parameter syntax, following the DB-API names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `:name`
    Named,

    /// `%(name)s`
    Pyformat,

    /// `%s`
    Format,

    /// `?`
    Qmark,

    /// `$1`, `$2`, ..
    Numeric,
}

impl ParamStyle {
    /// Positional styles bind by order, so a parameter used twice is sent
    /// twice.
    pub fn is_positional(self) -> bool {
        matches!(self, Self::Format | Self::Qmark | Self::Numeric)
    }
}
