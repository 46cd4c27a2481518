mod builder;
pub use builder::TableBuilder;

mod column;
pub use column::{Column, ColumnId};

mod on_update;
pub use on_update::OnUpdate;

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;

/// Resolved table metadata that statements are compiled against.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table).column(id)
    }

    /// Starts defining a new table. The table is added to the schema when
    /// [`TableBuilder::finish`] is called.
    pub fn build_table(&mut self, name: impl Into<String>) -> TableBuilder<'_> {
        TableBuilder::new(self, name.into())
    }
}
