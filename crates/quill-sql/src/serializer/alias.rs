use crate::resolve;

use quill_core::{stmt::TableRef, Schema};

use std::collections::HashMap;

/// Names aliased and derived tables that were not given one.
///
/// Anonymous derived tables become `anon_<n>`, anonymous table aliases
/// `<table>_<n>`. Names are numbered per base in the order the tables are
/// assigned, and are stable for the rest of the compile call.
#[derive(Debug, Default)]
pub(super) struct Aliases {
    names: HashMap<TableRef, String>,
    counters: HashMap<String, usize>,
}

impl Aliases {
    /// Assigns names to `table_refs` and to the tables of any derived table
    /// among them, depth first.
    pub(super) fn assign<'a>(
        &mut self,
        schema: &Schema,
        table_refs: impl IntoIterator<Item = &'a TableRef>,
    ) {
        for table_ref in table_refs {
            self.name(schema, table_ref);

            if let Some(subquery) = table_ref.as_subquery() {
                let froms = resolve::select_froms(&subquery.select, &[]);
                self.assign(schema, &froms);
            }
        }
    }

    pub(super) fn name(&mut self, schema: &Schema, table_ref: &TableRef) -> Option<String> {
        let (explicit, base) = match table_ref {
            TableRef::Table(_) => return None,
            TableRef::Alias(alias) => (&alias.0.name, &schema.table(alias.0.table).name[..]),
            TableRef::Subquery(subquery) => (&subquery.0.name, "anon"),
        };

        if let Some(name) = explicit {
            return Some(name.clone());
        }

        if let Some(name) = self.names.get(table_ref) {
            return Some(name.clone());
        }

        let counter = self.counters.entry(base.to_string()).or_default();
        *counter += 1;
        let name = format!("{base}_{counter}");

        self.names.insert(table_ref.clone(), name.clone());
        Some(name)
    }
}
