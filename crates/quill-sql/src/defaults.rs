//! Client-side `onupdate` values.
//!
//! A generator fires for every table the statement writes, for each of its
//! generated columns the statement does not assign itself. Tables that are
//! only read from never fire.

use crate::Froms;

use quill_core::{
    schema::{ColumnId, TableId},
    stmt::{TableRef, Value},
    Schema,
};

use indexmap::IndexMap;
use tracing::trace;

/// A generated column and the value computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefetch {
    pub column: ColumnId,
    pub value: Value,
}

/// Generated values of a compiled UPDATE.
///
/// Every generated value is sent as a bind parameter. Prefetched values are
/// known to the caller once the statement is compiled; postfetched columns
/// are read back from the database with `RETURNING`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    /// Target table first, then secondary tables in FROM order. Tables with
    /// nothing generated are absent.
    prefetch: IndexMap<TableId, Vec<Prefetch>>,

    /// Target table columns only
    postfetch: Vec<Prefetch>,
}

impl Defaults {
    pub fn prefetch(&self) -> &IndexMap<TableId, Vec<Prefetch>> {
        &self.prefetch
    }

    /// Values generated for `table`, if any.
    pub fn prefetch_for(&self, table: impl Into<TableId>) -> &[Prefetch] {
        self.prefetch
            .get(&table.into())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn postfetch(&self) -> impl ExactSizeIterator<Item = ColumnId> + '_ {
        self.postfetch.iter().map(|generated| generated.column)
    }

    pub fn postfetch_names<'a>(&'a self, schema: &'a Schema) -> impl Iterator<Item = &'a str> {
        self.postfetch()
            .map(move |column| schema.column(column).name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.prefetch.is_empty() && self.postfetch.is_empty()
    }

    /// All generated values in SET clause order.
    pub(crate) fn assignments(&self) -> impl Iterator<Item = &Prefetch> + '_ {
        self.postfetch
            .iter()
            .chain(self.prefetch.values().flatten())
    }
}

/// Computes the generated values for an UPDATE of `target` that explicitly
/// writes `written`.
///
/// With `postfetch`, the target's generated columns are read back rather
/// than reported; secondary tables are always prefetched.
pub fn resolve(
    schema: &Schema,
    target: TableId,
    written: &[ColumnId],
    froms: &Froms,
    postfetch: bool,
) -> Defaults {
    let mut defaults = Defaults::default();

    let secondaries = froms
        .extras()
        .filter_map(TableRef::as_table)
        .filter(|table| written.iter().any(|column| column.table == *table));

    for table in std::iter::once(target).chain(secondaries) {
        let generated: Vec<_> = schema
            .table(table)
            .on_update_columns()
            .filter(|column| !written.contains(&column.id))
            .filter_map(|column| {
                let value = column.on_update.as_ref()?.eval();
                trace!(table = %schema.table(table).name, column = %column.name, ?value, "onupdate");
                Some(Prefetch {
                    column: column.id,
                    value,
                })
            })
            .collect();

        if generated.is_empty() {
            continue;
        }

        if postfetch && table == target {
            defaults.postfetch = generated;
        } else {
            defaults.prefetch.insert(table, generated);
        }
    }

    defaults
}
