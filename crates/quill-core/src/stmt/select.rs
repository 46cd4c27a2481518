use super::{Expr, ExprColumn, Filter, TableRef};
use crate::Schema;

use std::sync::Arc;

/// A SELECT used as a subquery.
///
/// The FROM list is not stated; it is derived from the tables the
/// projection and filter reference.
#[derive(Debug, Clone)]
pub struct Select {
    /// Projected expressions, in order
    pub columns: Vec<Expr>,

    pub filter: Filter,
}

/// An aliased [`Select`], usable as a derived table or a scalar subquery.
#[derive(Debug)]
pub struct Subquery {
    pub select: Select,

    /// Explicit alias. Anonymous subqueries are named `anon_<n>` per compile
    /// call.
    pub name: Option<String>,

    /// Output name of each projected column
    labels: Vec<String>,
}

impl Select {
    pub fn new<I>(columns: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Select {
            columns: columns.into_iter().map(Into::into).collect(),
            filter: Filter::default(),
        }
    }

    /// Appends a term to the WHERE clause.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filter.push(expr.into());
        self
    }

    /// Turns the select into an anonymous subquery.
    pub fn alias(self, schema: &Schema) -> Arc<Subquery> {
        Subquery::new(schema, self, None)
    }

    pub fn alias_as(self, schema: &Schema, name: impl Into<String>) -> Arc<Subquery> {
        Subquery::new(schema, self, Some(name.into()))
    }
}

impl Subquery {
    fn new(schema: &Schema, select: Select, name: Option<String>) -> Arc<Subquery> {
        // Columns keep their own name, labelled expressions their label.
        // Anything else gets a positional label.
        let labels = select
            .columns
            .iter()
            .enumerate()
            .map(|(i, expr)| match expr.bind_base(schema) {
                Some(name) => name.to_string(),
                None => format!("column{}", i + 1),
            })
            .collect();

        Arc::new(Subquery {
            select,
            name,
            labels,
        })
    }

    /// References a projected column by its label.
    ///
    /// # Panics
    ///
    /// Panics if no projected column has that label.
    pub fn c(self: &Arc<Self>, name: &str) -> Expr {
        let Some(index) = self.labels.iter().position(|label| label == name) else {
            panic!("subquery has no column labelled `{name}`");
        };

        ExprColumn {
            source: TableRef::from(self),
            index,
        }
        .into()
    }

    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}
