mod compiled;
pub use compiled::Compiled;

mod form;
pub use form::Form;

mod writes;
pub(crate) use writes::Write;

use crate::{
    binder::Binder,
    defaults,
    resolve,
    serializer::{Assignment, Serializer, UpdateSql},
    Dialect,
};

use quill_core::{stmt::Update, Error, Result, Schema};

use tracing::{debug, instrument};

/// Compiles UPDATE statements for one dialect.
///
/// A compiler holds no per-statement state: every call to
/// [`compile`](Compiler::compile) starts from fresh counters, so the same
/// statement always compiles to the same text and one compiler can be shared
/// between threads.
///
/// ```
/// use quill_core::{schema::Type, stmt::{Expr, Update}, Schema};
/// use quill_sql::Compiler;
///
/// let mut schema = Schema::default();
/// let users = schema
///     .build_table("users")
///     .column("id", Type::I64)
///     .primary_key()
///     .column("name", Type::String)
///     .finish();
/// let users = schema.table(users);
///
/// let stmt = Update::new(users)
///     .set(users.c("name"), "ed")
///     .filter(Expr::eq(users.c("id"), 7));
///
/// let compiled = Compiler::postgresql(&schema).compile(&stmt).unwrap();
/// assert_eq!(compiled.sql, "UPDATE users SET name=$1 WHERE users.id = $2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'a> {
    schema: &'a Schema,
    dialect: &'a Dialect,
}

impl<'a> Compiler<'a> {
    pub fn new(schema: &'a Schema, dialect: &'a Dialect) -> Self {
        Compiler { schema, dialect }
    }

    pub fn postgresql(schema: &'a Schema) -> Self {
        Self::new(schema, &Dialect::POSTGRESQL)
    }

    pub fn mysql(schema: &'a Schema) -> Self {
        Self::new(schema, &Dialect::MYSQL)
    }

    pub fn sqlite(schema: &'a Schema) -> Self {
        Self::new(schema, &Dialect::SQLITE)
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    #[instrument(
        name = "sql::update::compile",
        level = "trace",
        skip_all,
        fields(dialect = self.dialect.name)
    )]
    pub fn compile(&self, stmt: &Update) -> Result<Compiled> {
        let candidates = resolve::update_froms(stmt);

        let explicit_secondary = stmt
            .values
            .iter()
            .filter_map(|(key, _)| key.as_column())
            .any(|column| column.table != stmt.target);

        // Bare names resolve as they would render with every value present
        let qualified = self
            .select_form(&candidates, explicit_secondary)
            .is_ok_and(|form| form.qualifies_set());

        let writes = writes::resolve(self.schema, stmt, &candidates, qualified)?;

        // Values replaced by a later write no longer reference their tables
        let froms = resolve::write_froms(stmt, &writes);
        let writes_secondary = writes.iter().any(|write| write.column.table != stmt.target);
        let form = self.select_form(&froms, writes_secondary)?;

        debug!(?form, extras = froms.len(), writes = writes.len(), "update form");

        let postfetch = self.dialect.capability.postfetch_onupdate && !froms.is_multi_table();
        let written: Vec<_> = writes.iter().map(|write| write.column).collect();
        let defaults = defaults::resolve(self.schema, stmt.target, &written, &froms, postfetch);

        if writes.is_empty() && defaults.is_empty() {
            return Err(Error::invalid_statement("UPDATE has no values to SET"));
        }

        let bindings = Binder::new(self.schema).bind(stmt, &writes, &defaults)?;

        let assignments = writes
            .iter()
            .map(|write| Assignment::Expr {
                column: write.column,
                expr: write.expr,
            })
            .chain(defaults.assignments().map(|generated| Assignment::Generated {
                column: generated.column,
                value: &generated.value,
            }))
            .collect();

        let sql_stmt = UpdateSql {
            target: stmt.target,
            froms: &froms,
            assignments,
            filter: &stmt.filter,
            returning: defaults.postfetch().collect(),
        };

        let mut params = vec![];
        let sql = Serializer::new(self.schema, self.dialect).serialize(
            form,
            &sql_stmt,
            &bindings,
            &mut params,
        )?;

        Ok(Compiled {
            sql,
            params,
            form,
            defaults,
        })
    }

    fn select_form(&self, froms: &resolve::Froms, writes_secondary: bool) -> Result<Form> {
        let capability = &self.dialect.capability;

        if !froms.is_multi_table() {
            return Ok(Form::SingleTable);
        }

        if writes_secondary {
            return if capability.multi_table_update {
                Ok(Form::MultiTable)
            } else {
                Err(Error::unsupported_dialect(
                    self.dialect.name,
                    "UPDATE statements that write to more than one table",
                ))
            };
        }

        let prefer_multi = capability.multi_table_update && capability.prefer_multi_table_update;

        if capability.correlated_from_update && !prefer_multi {
            Ok(Form::CorrelatedFrom)
        } else if capability.multi_table_update {
            Ok(Form::MultiTable)
        } else {
            Err(Error::unsupported_dialect(
                self.dialect.name,
                "UPDATE statements that reference more than one table",
            ))
        }
    }
}
