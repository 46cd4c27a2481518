use super::{Column, ColumnId, OnUpdate, Schema, Table, TableId, Type};
use crate::stmt::Value;

/// Defines a table column by column.
///
/// Modifiers such as [`nullable`](Self::nullable) apply to the most recently
/// added column.
///
/// ```
/// use quill_core::schema::{Schema, Type};
///
/// let mut schema = Schema::default();
/// let users = schema
///     .build_table("users")
///     .column("id", Type::I64)
///     .primary_key()
///     .column("name", Type::String)
///     .finish();
///
/// assert_eq!(schema.table(users).columns.len(), 2);
/// ```
#[derive(Debug)]
pub struct TableBuilder<'a> {
    schema: &'a mut Schema,
    table: Table,
}

impl<'a> TableBuilder<'a> {
    pub(super) fn new(schema: &'a mut Schema, name: String) -> Self {
        let id = TableId(schema.tables.len());

        TableBuilder {
            schema,
            table: Table {
                id,
                name,
                columns: vec![],
                primary_key: vec![],
            },
        }
    }

    pub fn column(mut self, name: impl Into<String>, ty: Type) -> Self {
        let name = name.into();

        assert!(
            self.table.column_by_name(&name).is_none(),
            "duplicate column `{name}` in table `{}`",
            self.table.name
        );

        let id = ColumnId {
            table: self.table.id,
            index: self.table.columns.len(),
        };

        self.table.columns.push(Column {
            id,
            name,
            ty,
            nullable: false,
            primary_key: false,
            on_update: None,
        });
        self
    }

    pub fn primary_key(mut self) -> Self {
        let column = self.last_column();
        column.primary_key = true;
        let id = column.id;
        self.table.primary_key.push(id);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.last_column().nullable = true;
        self
    }

    /// Sets a fixed `onupdate` value for the last column.
    pub fn on_update(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        let column = self.last_column();

        assert!(
            column.ty.accepts(&value),
            "onupdate value {value:?} does not fit column `{}` of type {:?}",
            column.name,
            column.ty
        );

        column.on_update = Some(OnUpdate::Value(value));
        self
    }

    /// Sets an `onupdate` callable for the last column.
    pub fn on_update_with(mut self, f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.last_column().on_update = Some(OnUpdate::func(f));
        self
    }

    /// Adds the table to the schema and returns its id.
    pub fn finish(self) -> TableId {
        let id = self.table.id;
        self.schema.tables.push(self.table);
        id
    }

    fn last_column(&mut self) -> &mut Column {
        match self.table.columns.last_mut() {
            Some(column) => column,
            None => panic!("table `{}` has no columns yet", self.table.name),
        }
    }
}
