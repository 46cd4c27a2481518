use super::{expr::Conjunction, Comma, Formatter, Ident, Params, ToSql};
use crate::resolve;

use quill_core::stmt::{Expr, Select, Subquery, TableRef};

use indexmap::IndexSet;

/// An entry of a FROM list
pub(super) struct FromItem<'a>(pub(super) &'a TableRef);

impl ToSql for FromItem<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let schema = f.serializer.schema;

        match self.0 {
            TableRef::Table(table) => {
                fmt!(f, Ident(&schema.table(*table).name));
            }
            TableRef::Alias(alias) => {
                let name = f.alias(self.0);
                fmt!(f, Ident(&schema.table(alias.0.table).name) " AS " name.map(Ident));
            }
            TableRef::Subquery(subquery) => {
                // A derived table does not see the enclosing statement's
                // tables, so its FROM list is complete.
                let froms = resolve::select_froms(&subquery.0.select, &[]);
                let outer = std::mem::replace(&mut f.correlate, froms.iter().cloned().collect());

                let name = f.alias(self.0);
                fmt!(
                    f,
                    "(" SelectSql { subquery: &subquery.0, froms: &froms, labels: true } ") AS " name.map(Ident)
                );

                f.correlate = outer;
            }
        }
    }
}

struct SelectSql<'a> {
    subquery: &'a Subquery,

    froms: &'a IndexSet<TableRef>,

    /// Label every projected column with its output name
    labels: bool,
}

impl ToSql for SelectSql<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let SelectSql {
            subquery,
            froms,
            labels,
        } = self;
        let Select { columns, filter } = &subquery.select;

        let projection = columns.iter().enumerate().map(move |(i, expr)| Projection {
            expr,
            label: match expr {
                _ if labels => Some(subquery.label(i)),
                Expr::Alias(alias) => Some(&alias.name[..]),
                _ => None,
            },
        });

        fmt!(f, "SELECT " Comma(projection));

        if !froms.is_empty() {
            fmt!(f, " FROM " Comma(froms.iter().map(FromItem)));
        }

        if !filter.is_empty() {
            fmt!(f, " WHERE " Conjunction(filter));
        }
    }
}

/// `expr AS label`
struct Projection<'a> {
    expr: &'a Expr,
    label: Option<&'a str>,
}

impl ToSql for Projection<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.expr);

        if let Some(label) = self.label {
            fmt!(f, " AS " Ident(label));
        }
    }
}

impl<T: Params> Formatter<'_, T> {
    /// `(SELECT ..)` used as a value. Tables of the enclosing statements are
    /// correlated, not listed.
    pub(super) fn scalar_subquery(&mut self, subquery: &Subquery) {
        let froms = resolve::select_froms(&subquery.select, &self.correlate);

        let depth = self.correlate.len();
        self.correlate.extend(froms.iter().cloned());

        fmt!(
            self,
            "(" SelectSql { subquery, froms: &froms, labels: false } ")"
        );

        self.correlate.truncate(depth);
    }
}
