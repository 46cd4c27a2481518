use super::{Expr, Value};

/// A bound parameter with a caller-chosen name.
///
/// The name is a suggestion: if another parameter already took it, the
/// compiler appends a numeric discriminator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprParam {
    pub name: String,

    pub value: Value,
}

impl Expr {
    pub fn param(name: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprParam {
            name: name.into(),
            value: value.into(),
        }
        .into()
    }
}

impl From<ExprParam> for Expr {
    fn from(value: ExprParam) -> Self {
        Self::Param(value)
    }
}
