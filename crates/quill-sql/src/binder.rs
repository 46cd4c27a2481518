//! Names every bind parameter of a statement before it is rendered.
//!
//! Literals written to a column take the column's name (`:name`). Literals
//! anywhere else are anonymous and take the name of the column they are
//! compared against plus a counter (`:name_1`), or `param_<n>` when there
//! is no such column. Explicitly named parameters keep their name. Any name
//! already taken gets a numeric suffix. Names are assigned in a fixed order:
//! WHERE clause, then SET values, then generated columns.

use crate::{compiler::Write, Defaults};

use quill_core::{
    schema::ColumnId,
    stmt::{visit, Expr, ExprBinaryOp, ExprColumn, ExprParam, Subquery, Update, Visit},
    Error, Result, Schema,
};

use by_address::ByAddress;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Bind parameter names assigned to a statement's literals.
///
/// Literals are keyed by node identity, so two equal literals in different
/// places get different names.
#[derive(Debug, Default)]
pub struct Bindings<'stmt> {
    exprs: HashMap<ByAddress<&'stmt Expr>, String>,

    /// Generated column values
    columns: HashMap<ColumnId, String>,
}

impl Bindings<'_> {
    pub fn expr<'a>(&'a self, expr: &'a Expr) -> Option<&'a str> {
        self.exprs.get(&ByAddress(expr)).map(String::as_str)
    }

    pub fn column(&self, column: ColumnId) -> Option<&str> {
        self.columns.get(&column).map(String::as_str)
    }
}

/// Assigns the parameter names of one compile call.
pub(crate) struct Binder<'a, 'stmt> {
    schema: &'a Schema,

    names: BindNames,

    bindings: Bindings<'stmt>,

    /// Derived tables already walked
    entered: HashSet<ByAddress<&'stmt Subquery>>,

    /// First failure. `Visit` methods cannot return errors.
    error: Option<Error>,
}

impl<'a, 'stmt> Binder<'a, 'stmt> {
    pub(crate) fn new(schema: &'a Schema) -> Self {
        Binder {
            schema,
            names: BindNames::default(),
            bindings: Bindings::default(),
            entered: HashSet::new(),
            error: None,
        }
    }

    pub(crate) fn bind(
        mut self,
        stmt: &'stmt Update,
        writes: &[Write<'stmt>],
        defaults: &Defaults,
    ) -> Result<Bindings<'stmt>> {
        let schema = self.schema;

        self.visit_filter(&stmt.filter);

        for write in writes {
            match write.expr {
                Expr::Value(_) => {
                    let name = &schema.column(write.column).name;
                    self.named(write.expr, name);
                }
                expr => self.visit_expr(expr),
            }
        }

        for generated in defaults.assignments() {
            let name = &schema.column(generated.column).name;
            match self.names.named(name) {
                Ok(name) => {
                    self.bindings.columns.insert(generated.column, name);
                }
                Err(err) => self.fail(err),
            }
        }

        match self.error {
            Some(err) => Err(err),
            None => Ok(self.bindings),
        }
    }

    fn named(&mut self, expr: &'stmt Expr, base: &str) {
        if self.bindings.expr(expr).is_some() {
            return;
        }

        match self.names.named(base) {
            Ok(name) => self.insert(expr, name),
            Err(err) => self.fail(err),
        }
    }

    fn anonymous(&mut self, expr: &'stmt Expr, base: &str) {
        if self.bindings.expr(expr).is_some() {
            return;
        }

        match self.names.anonymous(base) {
            Ok(name) => self.insert(expr, name),
            Err(err) => self.fail(err),
        }
    }

    fn insert(&mut self, expr: &'stmt Expr, name: String) {
        trace!(%name, "bind");
        self.bindings.exprs.insert(ByAddress(expr), name);
    }

    fn fail(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }
}

impl<'stmt> Visit<'stmt> for Binder<'_, 'stmt> {
    fn visit_expr(&mut self, i: &'stmt Expr) {
        match i {
            Expr::Value(_) => self.anonymous(i, "param"),
            Expr::Param(ExprParam { name, .. }) => self.named(i, name),
            _ => visit::visit_expr(self, i),
        }
    }

    fn visit_expr_binary_op(&mut self, i: &'stmt ExprBinaryOp) {
        let schema = self.schema;

        // A literal compared against a column is named after the column
        for (operand, other) in [(&*i.lhs, &*i.rhs), (&*i.rhs, &*i.lhs)] {
            if !operand.is_value() {
                continue;
            }

            if let Some(base) = other.bind_base(schema) {
                self.anonymous(operand, base);
            }
        }

        visit::visit_expr_binary_op(self, i);
    }

    fn visit_expr_column(&mut self, i: &'stmt ExprColumn) {
        // Parameters inside a derived table are named where the table is
        // first referenced.
        if let Some(subquery) = i.source.as_subquery() {
            if self.entered.insert(ByAddress(&**subquery)) {
                self.visit_select(&subquery.select);
            }
        }
    }
}

/// Hands out unique parameter names.
#[derive(Debug, Default)]
struct BindNames {
    taken: HashSet<String>,

    /// Last suffix handed out per base name
    counters: HashMap<String, usize>,
}

impl BindNames {
    /// `base_<n>` with the next free `n`.
    fn anonymous(&mut self, base: &str) -> Result<String> {
        let counter = self.counters.entry(base.to_string()).or_default();

        let name = loop {
            *counter += 1;
            let name = format!("{base}_{counter}");
            if !self.taken.contains(&name) {
                break name;
            }
        };

        self.take(name)
    }

    /// `base`, or `base_<n>` when `base` is taken.
    fn named(&mut self, base: &str) -> Result<String> {
        if self.taken.contains(base) {
            self.anonymous(base)
        } else {
            self.take(base.to_string())
        }
    }

    fn take(&mut self, name: String) -> Result<String> {
        if !self.taken.insert(name.clone()) {
            return Err(Error::duplicate_binding(name));
        }
        Ok(name)
    }
}
