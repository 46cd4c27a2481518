use super::{
    expr::{Conjunction, TableColumn},
    select::FromItem,
    Comma, Formatter, Ident, Params, ToSql,
};
use crate::Froms;

use quill_core::{
    schema::{ColumnId, TableId},
    stmt::{Expr, Filter, TableRef, Value},
};

/// An UPDATE with its writes, FROM objects and generated values resolved.
#[derive(Debug)]
pub(crate) struct UpdateSql<'a> {
    pub(crate) target: TableId,

    pub(crate) froms: &'a Froms,

    /// SET clause, explicit writes first
    pub(crate) assignments: Vec<Assignment<'a>>,

    pub(crate) filter: &'a Filter,

    /// Columns read back after the update
    pub(crate) returning: Vec<ColumnId>,
}

#[derive(Debug)]
pub(crate) enum Assignment<'a> {
    Expr { column: ColumnId, expr: &'a Expr },
    Generated { column: ColumnId, value: &'a Value },
}

/// The shape of an UPDATE statement. Each dialect capability maps to one
/// implementation.
pub(super) trait UpdateForm {
    /// Whether SET columns are written `table.column`
    fn qualify_set(&self) -> bool {
        false
    }

    /// Tables listed after `UPDATE`
    fn update_tables<P: Params>(&self, stmt: &UpdateSql<'_>, f: &mut Formatter<'_, P>) {
        let schema = f.serializer.schema;
        fmt!(f, Ident(&schema.table(stmt.target).name));
    }

    /// Trailing `FROM` clause, if any
    fn from_clause<P: Params>(&self, _stmt: &UpdateSql<'_>, _f: &mut Formatter<'_, P>) {}
}

/// `UPDATE t SET c=.. WHERE ..`
pub(super) struct SingleTable;

/// `UPDATE t SET c=.. FROM a, b WHERE ..`
pub(super) struct CorrelatedFrom;

/// `UPDATE t, a SET t.c=.., a.d=.. WHERE ..`
pub(super) struct MultiTable;

impl UpdateForm for SingleTable {}

impl UpdateForm for CorrelatedFrom {
    fn from_clause<P: Params>(&self, stmt: &UpdateSql<'_>, f: &mut Formatter<'_, P>) {
        fmt!(f, " FROM " Comma(stmt.froms.extras().map(FromItem)));
    }
}

impl UpdateForm for MultiTable {
    fn qualify_set(&self) -> bool {
        true
    }

    fn update_tables<P: Params>(&self, stmt: &UpdateSql<'_>, f: &mut Formatter<'_, P>) {
        let target = TableRef::Table(stmt.target);
        let tables = std::iter::once(&target).chain(stmt.froms.extras());
        fmt!(f, Comma(tables.map(FromItem)));
    }
}

pub(super) fn render<F, P>(form: &F, stmt: &UpdateSql<'_>, f: &mut Formatter<'_, P>)
where
    F: UpdateForm,
    P: Params,
{
    let schema = f.serializer.schema;

    f.correlate = std::iter::once(TableRef::Table(stmt.target))
        .chain(stmt.froms.extras().cloned())
        .collect();
    f.aliases.assign(schema, stmt.froms.extras());

    fmt!(f, "UPDATE ");
    form.update_tables(stmt, f);

    let qualify = form.qualify_set();
    let assignments = stmt.assignments.iter().map(|assignment| SetItem {
        assignment,
        qualify,
    });
    fmt!(f, " SET " Comma(assignments));

    form.from_clause(stmt, f);

    if !stmt.filter.is_empty() {
        fmt!(f, " WHERE " Conjunction(stmt.filter));
    }

    if !stmt.returning.is_empty() {
        fmt!(f, " RETURNING " Comma(stmt.returning.iter().copied().map(TableColumn)));
    }
}

/// `column=value`
struct SetItem<'a> {
    assignment: &'a Assignment<'a>,
    qualify: bool,
}

impl ToSql for SetItem<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = match self.assignment {
            Assignment::Expr { column, .. } | Assignment::Generated { column, .. } => *column,
        };

        if self.qualify {
            fmt!(f, TableColumn(column));
        } else {
            let schema = f.serializer.schema;
            fmt!(f, Ident(&schema.column(column).name));
        }

        fmt!(f, "=");

        match self.assignment {
            Assignment::Expr { expr, .. } => fmt!(f, *expr),
            Assignment::Generated { column, value } => f.bind_column(*column, value),
        }
    }
}
