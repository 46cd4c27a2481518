use super::{BinaryOp, ExprAlias, ExprBinaryOp, ExprColumn, ExprParam, ExprSubquery, Value};
use crate::{schema::ColumnId, Schema};

/// An SQL expression.
///
/// The variant set is closed; serializers match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `expr AS name`
    Alias(ExprAlias),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column of a table, aliased table or derived table
    Column(ExprColumn),

    /// A literal with an explicit bind parameter name
    Param(ExprParam),

    /// A scalar subquery
    Subquery(ExprSubquery),

    /// A literal value. Always sent as a bind parameter.
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Self::Column(expr) => Some(expr),
            _ => None,
        }
    }

    /// The operator binding this expression, if any. Used to decide where
    /// parentheses are needed.
    pub fn operator(&self) -> Option<BinaryOp> {
        match self {
            Self::BinaryOp(expr) => Some(expr.op),
            Self::Alias(expr) => expr.expr.operator(),
            _ => None,
        }
    }

    /// The name a bind parameter compared against this expression is derived
    /// from, e.g. `name` for `users.name = 'ed'`.
    pub fn bind_base<'a>(&'a self, schema: &'a Schema) -> Option<&'a str> {
        match self {
            Self::Column(expr) => Some(expr.name(schema)),
            Self::Alias(expr) => Some(&expr.name),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<ColumnId> for Expr {
    fn from(value: ColumnId) -> Self {
        Self::Column(value.into())
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}
