use quill_core::{
    schema::{ColumnId, OnUpdate, TableId, Type},
    stmt::Value,
    Schema,
};

use pretty_assertions::assert_eq;

fn users() -> Schema {
    let mut schema = Schema::default();
    schema
        .build_table("users")
        .column("id", Type::I64)
        .primary_key()
        .column("name", Type::String)
        .nullable()
        .column("updated", Type::String)
        .on_update("now")
        .finish();
    schema
}

#[test]
fn columns_get_sequential_ids() {
    let schema = users();
    let users = schema.table(TableId(0));

    assert_eq!(users.name, "users");
    assert_eq!(
        users.columns.iter().map(|c| c.id).collect::<Vec<_>>(),
        [
            ColumnId {
                table: TableId(0),
                index: 0
            },
            ColumnId {
                table: TableId(0),
                index: 1
            },
            ColumnId {
                table: TableId(0),
                index: 2
            },
        ]
    );
    assert_eq!(users.c("name"), schema.column(users.c("name")).id);
}

#[test]
fn modifiers_apply_to_last_column() {
    let schema = users();
    let users = schema.table(TableId(0));

    assert!(users.column(users.c("id")).primary_key);
    assert!(!users.column(users.c("id")).nullable);
    assert!(users.column(users.c("name")).nullable);
    assert_eq!(
        users.primary_key_columns().map(|c| &c.name[..]).collect::<Vec<_>>(),
        ["id"]
    );
}

#[test]
fn on_update_columns() {
    let schema = users();
    let users = schema.table(TableId(0));

    let generated: Vec<_> = users.on_update_columns().collect();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].name, "updated");

    match &generated[0].on_update {
        Some(OnUpdate::Value(value)) => assert_eq!(value, &Value::from("now")),
        other => panic!("unexpected onupdate: {other:?}"),
    }
}

#[test]
fn second_table_gets_next_id() {
    let mut schema = users();
    let addresses = schema
        .build_table("addresses")
        .column("id", Type::I64)
        .finish();

    assert_eq!(addresses, TableId(1));
    assert_eq!(schema.table(addresses).c("id").table, addresses);
}

#[test]
fn column_lookup_by_name() {
    let schema = users();
    let users = schema.table(TableId(0));

    assert!(users.column_by_name("name").is_some());
    assert!(users.column_by_name("nickname").is_none());
}

#[test]
#[should_panic(expected = "table `users` has no column named `nickname`")]
fn unknown_column_panics() {
    let schema = users();
    schema.table(TableId(0)).c("nickname");
}

#[test]
#[should_panic(expected = "duplicate column `id`")]
fn duplicate_column_panics() {
    let mut schema = Schema::default();
    schema
        .build_table("t")
        .column("id", Type::I64)
        .column("id", Type::I64);
}

#[test]
#[should_panic(expected = "does not fit column")]
fn on_update_value_must_fit_type() {
    let mut schema = Schema::default();
    schema
        .build_table("t")
        .column("id", Type::I64)
        .on_update("not a number");
}

#[test]
fn type_accepts_values() {
    assert!(Type::I64.accepts(&Value::I64(1)));
    assert!(Type::F64.accepts(&Value::I64(1)));
    assert!(Type::String.accepts(&Value::Null));
    assert!(!Type::Bool.accepts(&Value::from("x")));
}
