//! Finds the tables a statement references besides the one it targets.

use crate::compiler::Write;

use quill_core::{
    schema::{ColumnId, TableId},
    stmt::{visit, Expr, ExprColumn, ExprSubquery, Filter, Select, TableRef, Update, Visit},
};

use indexmap::IndexSet;

/// The extra FROM objects of an UPDATE, in first-reference order.
///
/// Tables, aliased tables and derived tables each appear at most once; the
/// target table never appears.
#[derive(Debug, Clone, Default)]
pub struct Froms {
    extras: IndexSet<TableRef>,
}

impl Froms {
    pub fn extras(&self) -> impl ExactSizeIterator<Item = &TableRef> + '_ {
        self.extras.iter()
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// Returns `true` when the statement needs more than its target table.
    pub fn is_multi_table(&self) -> bool {
        !self.extras.is_empty()
    }
}

/// Collects the extra FROM objects of an UPDATE.
///
/// The WHERE clause is scanned first, then each value in mapping order
/// (including the table of a column key). Columns inside scalar subqueries
/// belong to the subquery and are not collected.
///
/// Bare-name keys are not resolved yet, so a value later replaced through
/// another key for the same column still contributes its tables.
pub fn update_froms(stmt: &Update) -> Froms {
    collect_froms(
        stmt.target,
        &stmt.filter,
        stmt.values.iter().map(|(key, expr)| (key.as_column(), expr)),
    )
}

/// Collects the extra FROM objects of the writes that survive key
/// resolution.
pub(crate) fn write_froms(stmt: &Update, writes: &[Write<'_>]) -> Froms {
    collect_froms(
        stmt.target,
        &stmt.filter,
        writes.iter().map(|write| (Some(write.column), write.expr)),
    )
}

fn collect_froms<'stmt>(
    target: TableId,
    filter: &'stmt Filter,
    values: impl Iterator<Item = (Option<ColumnId>, &'stmt Expr)>,
) -> Froms {
    let target = TableRef::Table(target);
    let mut collect = Collect {
        found: IndexSet::new(),
        exclude: std::slice::from_ref(&target),
    };

    collect.visit_filter(filter);

    for (column, expr) in values {
        if let Some(column) = column {
            collect.insert(TableRef::Table(column.table));
        }
        collect.visit_expr(expr);
    }

    Froms {
        extras: collect.found,
    }
}

/// Collects the FROM objects of a subquery's SELECT, skipping any in
/// `correlate` (tables of enclosing statements).
pub fn select_froms(select: &Select, correlate: &[TableRef]) -> IndexSet<TableRef> {
    let mut collect = Collect {
        found: IndexSet::new(),
        exclude: correlate,
    };
    visit::visit_select(&mut collect, select);
    collect.found
}

struct Collect<'a> {
    found: IndexSet<TableRef>,
    exclude: &'a [TableRef],
}

impl Collect<'_> {
    fn insert(&mut self, table_ref: TableRef) {
        if !self.exclude.contains(&table_ref) {
            self.found.insert(table_ref);
        }
    }
}

impl<'stmt> Visit<'stmt> for Collect<'_> {
    fn visit_expr_column(&mut self, i: &'stmt ExprColumn) {
        self.insert(i.source.clone());
    }

    fn visit_expr_subquery(&mut self, _i: &'stmt ExprSubquery) {}
}
