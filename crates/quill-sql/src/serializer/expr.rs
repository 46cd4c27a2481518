use super::{Delimited, Formatter, Ident, Params, ToSql};

use quill_core::{
    schema::ColumnId,
    stmt::{BinaryOp, Expr, ExprColumn, Filter, TableRef},
};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            // Labels only render in a projection
            Expr::Alias(expr) => expr.expr.as_ref().to_sql(f),
            Expr::BinaryOp(expr) => {
                fmt!(
                    f,
                    Operand::lhs(&expr.lhs, expr.op) " " expr.op.as_str() " " Operand::rhs(&expr.rhs, expr.op)
                );
            }
            Expr::Column(expr) => expr.to_sql(f),
            Expr::Param(expr) => f.bind_expr(self, &expr.value),
            Expr::Subquery(expr) => f.scalar_subquery(&expr.subquery.0),
            Expr::Value(value) => f.bind_expr(self, value),
        }
    }
}

impl ToSql for &ExprColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let schema = f.serializer.schema;

        match &self.source {
            TableRef::Table(table) => {
                fmt!(f, Ident(&schema.table(*table).name) ".");
            }
            source => {
                let alias = f.alias(source);
                fmt!(f, alias.map(Ident) ".");
            }
        }

        fmt!(f, Ident(self.name(schema)));
    }
}

/// `table.column`
pub(super) struct TableColumn(pub(super) ColumnId);

impl ToSql for TableColumn {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let schema = f.serializer.schema;
        let table = schema.table(self.0.table);
        fmt!(f, Ident(&table.name) "." Ident(&table.column(self.0).name));
    }
}

/// The terms of a WHERE clause, ANDed together
pub(super) struct Conjunction<'a>(pub(super) &'a Filter);

impl ToSql for Conjunction<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let parent = if self.0.len() > 1 {
            Some(BinaryOp::And)
        } else {
            None
        };

        fmt!(
            f,
            Delimited(
                self.0.iter().map(|term| Operand {
                    expr: term,
                    parent,
                    rhs: false,
                }),
                " AND "
            )
        );
    }
}

/// An operator's operand, parenthesized when it would otherwise bind
/// differently.
struct Operand<'a> {
    expr: &'a Expr,
    parent: Option<BinaryOp>,
    rhs: bool,
}

impl<'a> Operand<'a> {
    fn lhs(expr: &'a Expr, parent: BinaryOp) -> Self {
        Operand {
            expr,
            parent: Some(parent),
            rhs: false,
        }
    }

    fn rhs(expr: &'a Expr, parent: BinaryOp) -> Self {
        Operand {
            expr,
            parent: Some(parent),
            rhs: true,
        }
    }

    fn needs_parens(&self) -> bool {
        let (Some(parent), Some(op)) = (self.parent, self.expr.operator()) else {
            return false;
        };

        if op.precedence() != parent.precedence() {
            return op.precedence() < parent.precedence();
        }

        // Equal precedence groups left to right
        self.rhs && !(op == parent && op.is_associative())
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.needs_parens() {
            fmt!(f, "(" self.expr ")");
        } else {
            self.expr.to_sql(f);
        }
    }
}
