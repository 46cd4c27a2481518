use super::{Expr, Filter, ValueKey, Values};
use crate::schema::TableId;

/// An UPDATE statement.
///
/// Built once by the caller, then compiled as many times as needed. Compiling
/// never modifies it.
///
/// ```
/// use quill_core::{schema::Type, stmt::{Expr, Update}, Schema};
///
/// let mut schema = Schema::default();
/// let users = schema
///     .build_table("users")
///     .column("id", Type::I64)
///     .primary_key()
///     .column("name", Type::String)
///     .finish();
/// let users = schema.table(users);
///
/// let stmt = Update::new(users)
///     .set(users.c("name"), "ed")
///     .filter(Expr::eq(users.c("id"), 8));
///
/// assert_eq!(stmt.values.len(), 1);
/// assert_eq!(stmt.filter.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Update {
    /// The table being updated
    pub target: TableId,

    /// Columns to assign, in order
    pub values: Values,

    /// WHERE clause terms
    pub filter: Filter,
}

impl Update {
    pub fn new(target: impl Into<TableId>) -> Update {
        Update {
            target: target.into(),
            values: Values::default(),
            filter: Filter::default(),
        }
    }

    /// Assigns `expr` to a column. A later assignment to the same key wins.
    pub fn set(mut self, key: impl Into<ValueKey>, expr: impl Into<Expr>) -> Update {
        self.values.insert(key, expr);
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = (ValueKey, Expr)>) -> Update {
        for (key, expr) in values {
            self.values.insert(key, expr);
        }
        self
    }

    /// Appends a term to the WHERE clause. Terms are ANDed in the order they
    /// are added.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Update {
        self.filter.push(expr.into());
        self
    }
}
