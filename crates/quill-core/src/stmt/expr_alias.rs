use super::Expr;

/// Labels an expression: `expr AS name`.
///
/// The label is only rendered in a SELECT projection. Anywhere else the
/// inner expression is rendered on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAlias {
    pub expr: Box<Expr>,

    pub name: String,
}

impl Expr {
    pub fn alias(expr: impl Into<Self>, name: impl Into<String>) -> Self {
        ExprAlias {
            expr: Box::new(expr.into()),
            name: name.into(),
        }
        .into()
    }
}

impl From<ExprAlias> for Expr {
    fn from(value: ExprAlias) -> Self {
        Self::Alias(value)
    }
}
