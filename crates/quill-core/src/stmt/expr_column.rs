use super::{Expr, TableRef};
use crate::{schema::ColumnId, Schema};

/// A reference to a column.
///
/// `index` is the column's position within its source: the table's columns
/// for a table or aliased table, the projection for a derived table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    pub source: TableRef,

    pub index: usize,
}

impl Expr {
    pub fn column(source: impl Into<TableRef>, index: usize) -> Self {
        ExprColumn {
            source: source.into(),
            index,
        }
        .into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl ExprColumn {
    /// The column's name as seen through its source, e.g. the projection
    /// label when the source is a derived table.
    pub fn name<'a>(&'a self, schema: &'a Schema) -> &'a str {
        match &self.source {
            TableRef::Table(table) => {
                &schema.table(*table).columns[self.index].name
            }
            TableRef::Alias(alias) => alias.column_name(self.index),
            TableRef::Subquery(subquery) => subquery.label(self.index),
        }
    }

    /// Returns the schema column when the reference points directly at a
    /// table, not through an alias or derived table.
    pub fn column_id(&self) -> Option<ColumnId> {
        match &self.source {
            TableRef::Table(table) => Some(ColumnId {
                table: *table,
                index: self.index,
            }),
            _ => None,
        }
    }
}

impl From<ColumnId> for ExprColumn {
    fn from(value: ColumnId) -> Self {
        ExprColumn {
            source: TableRef::Table(value.table),
            index: value.index,
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
