use crate::Froms;

use quill_core::{
    bail,
    schema::{ColumnId, TableId},
    stmt::{Expr, TableRef, Update, ValueKey},
    Error, Result, Schema,
};

use indexmap::IndexMap;

/// A SET clause entry with its column resolved.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Write<'stmt> {
    pub(crate) column: ColumnId,
    pub(crate) expr: &'stmt Expr,
}

/// Resolves every value key of `stmt` to a schema column.
///
/// Keys resolving to the same column collapse into one write: the last
/// expression wins, the first position is kept.
pub(super) fn resolve<'stmt>(
    schema: &Schema,
    stmt: &'stmt Update,
    froms: &Froms,
    qualified: bool,
) -> Result<Vec<Write<'stmt>>> {
    let mut writes = IndexMap::new();

    for (key, expr) in &stmt.values {
        let column = match key {
            ValueKey::Column(column) => *column,
            ValueKey::Name(name) => resolve_name(schema, stmt.target, froms, name, qualified)?,
        };
        writes.insert(column, expr);
    }

    Ok(writes
        .into_iter()
        .map(|(column, expr)| Write { column, expr })
        .collect())
}

/// Finds the column a bare name refers to among the target and the tables
/// the statement references.
fn resolve_name(
    schema: &Schema,
    target: TableId,
    froms: &Froms,
    name: &str,
    qualified: bool,
) -> Result<ColumnId> {
    struct Candidate {
        table: String,
        column: Option<ColumnId>,
    }

    let mut candidates = vec![];

    let tables = std::iter::once(TableRef::Table(target)).chain(froms.extras().cloned());

    for table_ref in tables {
        match &table_ref {
            TableRef::Table(table) => {
                let table = schema.table(*table);
                if let Some(column) = table.column_by_name(name) {
                    candidates.push(Candidate {
                        table: table.name.clone(),
                        column: Some(column.id),
                    });
                }
            }
            TableRef::Alias(alias) => {
                if alias.0.column_index(name).is_some() {
                    let table = &schema.table(alias.0.table).name;
                    candidates.push(Candidate {
                        table: alias.0.name.clone().unwrap_or_else(|| format!("{table} (aliased)")),
                        column: None,
                    });
                }
            }
            // Derived tables are read-only
            TableRef::Subquery(_) => {}
        }
    }

    match &candidates[..] {
        [] => Err(Error::invalid_statement(format!(
            "no table in the statement has a column named `{name}`"
        ))),
        [Candidate {
            column: Some(column),
            ..
        }] => Ok(*column),
        [Candidate { table, column: None }] => {
            bail!("cannot SET `{name}` through aliased table {table}")
        }
        _ => {
            // The target wins when SET columns are qualified
            if qualified {
                if let Some(column) = candidates
                    .iter()
                    .filter_map(|candidate| candidate.column)
                    .find(|column| column.table == target)
                {
                    return Ok(column);
                }
            }

            Err(Error::ambiguous_column(
                name,
                candidates.iter().map(|candidate| candidate.table.clone()),
            ))
        }
    }
}
