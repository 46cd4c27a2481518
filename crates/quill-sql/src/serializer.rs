#[macro_use]
mod fmt;
use fmt::ToSql;

mod alias;
use alias::Aliases;

mod delim;
use delim::{Comma, Delimited};

mod expr;

mod ident;
use ident::Ident;

mod params;
pub use params::{Param, Params, Placeholder};

mod select;

mod update;
pub(crate) use update::{Assignment, UpdateSql};

use crate::{Bindings, Dialect, Form};

use quill_core::{
    err,
    schema::ColumnId,
    stmt::{Expr, TableRef, Value},
    Error, Result, Schema,
};

use std::collections::HashMap;

/// Serialize a compiled UPDATE to a SQL string
#[derive(Debug)]
pub(crate) struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,

    /// The target dialect decides identifier quoting and placeholder syntax.
    dialect: &'a Dialect,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Parameter names assigned by the binder
    bindings: &'a Bindings<'a>,

    /// Placeholders of parameters already pushed, by name. Named styles send
    /// a repeated parameter once.
    sent: HashMap<String, Placeholder>,

    /// Names of aliased and derived tables
    aliases: Aliases,

    /// Tables of the enclosing statements. Scalar subqueries correlate to
    /// them instead of listing them again.
    correlate: Vec<TableRef>,

    /// First failure. `ToSql` impls cannot return errors.
    error: Option<Error>,
}

impl<'a> Serializer<'a> {
    pub(crate) fn new(schema: &'a Schema, dialect: &'a Dialect) -> Self {
        Serializer { schema, dialect }
    }

    pub(crate) fn serialize(
        &self,
        form: Form,
        stmt: &UpdateSql<'_>,
        bindings: &Bindings<'_>,
        params: &mut impl Params,
    ) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            bindings,
            sent: HashMap::new(),
            aliases: Aliases::default(),
            correlate: vec![],
            error: None,
        };

        match form {
            Form::SingleTable => update::render(&update::SingleTable, stmt, &mut fmt),
            Form::CorrelatedFrom => update::render(&update::CorrelatedFrom, stmt, &mut fmt),
            Form::MultiTable => update::render(&update::MultiTable, stmt, &mut fmt),
        }

        match fmt.error {
            Some(err) => Err(err),
            None => Ok(ret),
        }
    }
}

impl<T: Params> Formatter<'_, T> {
    /// Writes the placeholder of a literal named by the binder.
    fn bind_expr(&mut self, expr: &Expr, value: &Value) {
        let bindings = self.bindings;
        match bindings.expr(expr) {
            Some(name) => self.bind(name, value),
            None => self.fail(err!("literal {value:?} has no bind parameter")),
        }
    }

    /// Writes the placeholder of a generated column value.
    fn bind_column(&mut self, column: ColumnId, value: &Value) {
        let bindings = self.bindings;
        match bindings.column(column) {
            Some(name) => self.bind(name, value),
            None => {
                let schema = self.serializer.schema;
                let name = &schema.column(column).name;
                self.fail(err!("generated column `{name}` has no bind parameter"))
            }
        }
    }

    fn bind(&mut self, name: &str, value: &Value) {
        let style = self.serializer.dialect.param_style;

        let sent = if style.is_positional() {
            None
        } else {
            self.sent.get(name).copied()
        };

        let placeholder = match sent {
            Some(placeholder) => placeholder,
            None => {
                let placeholder = self.params.push(name, value);
                self.sent.insert(name.to_string(), placeholder);
                placeholder
            }
        };

        params::Bind { name, placeholder }.to_sql(self);
    }

    fn fail(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }

    /// Name a table reference renders under, `None` for a plain table.
    fn alias(&mut self, table_ref: &TableRef) -> Option<String> {
        self.aliases.name(self.serializer.schema, table_ref)
    }
}
