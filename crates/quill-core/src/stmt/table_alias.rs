use super::{Expr, ExprColumn, TableRef};
use crate::schema::{Table, TableId};

use std::sync::Arc;

/// A table referenced under another name.
///
/// Without an explicit name the compiler assigns `<table>_<n>`, numbered per
/// compile call.
#[derive(Debug)]
pub struct TableAlias {
    pub table: TableId,

    pub name: Option<String>,

    /// Column names copied from the table so references can be resolved
    /// without the schema.
    columns: Vec<String>,
}

impl TableAlias {
    pub fn new(table: &Table) -> Arc<TableAlias> {
        Self::build(table, None)
    }

    pub fn named(table: &Table, name: impl Into<String>) -> Arc<TableAlias> {
        Self::build(table, Some(name.into()))
    }

    fn build(table: &Table, name: Option<String>) -> Arc<TableAlias> {
        Arc::new(TableAlias {
            table: table.id,
            name,
            columns: table.columns.iter().map(|c| c.name.clone()).collect(),
        })
    }

    /// References a column of the aliased table.
    ///
    /// # Panics
    ///
    /// Panics if the table has no such column.
    pub fn c(self: &Arc<Self>, name: &str) -> Expr {
        let Some(index) = self.column_index(name) else {
            panic!("aliased table has no column named `{name}`");
        };

        ExprColumn {
            source: TableRef::from(self),
            index,
        }
        .into()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column_name(&self, index: usize) -> &str {
        &self.columns[index]
    }
}

impl Table {
    /// Creates an anonymous alias of this table.
    pub fn alias(&self) -> Arc<TableAlias> {
        TableAlias::new(self)
    }
}
