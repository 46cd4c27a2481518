mod support;
use support::*;

use quill_core::{
    schema::Type,
    stmt::{Expr, Update, Value},
    Schema,
};
use quill_sql::{Compiler, Dialect, Prefetch};

use pretty_assertions::assert_eq;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

#[test]
fn defaults_fire_for_written_secondary_table() {
    let schema = defaults_schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let stmt = Update::new(addresses)
        .set(addresses.c("email_address"), users.c("name"))
        .set(users.c("name"), "ed2")
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")))
        .filter(Expr::eq(users.c("name"), "ed"));

    let compiled = Compiler::mysql(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE addresses, users SET addresses.email_address=users.name, users.name=%s, \
         users.some_update=%s WHERE users.id = addresses.user_id AND users.name = %s"
    );
    assert_eq!(
        compiled.values().cloned().collect::<Vec<_>>(),
        [
            Value::from("ed2"),
            Value::from("im the update"),
            Value::from("ed")
        ]
    );

    assert_eq!(compiled.defaults.prefetch().len(), 1);
    assert_eq!(
        compiled.defaults.prefetch_for(users),
        [Prefetch {
            column: users.c("some_update"),
            value: Value::from("im the update"),
        }]
    );
    assert_eq!(compiled.defaults.postfetch().len(), 0);
}

#[test]
fn no_defaults_for_read_only_secondary_table() {
    let schema = defaults_schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let stmt = Update::new(addresses)
        .set("email_address", users.c("name"))
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")))
        .filter(Expr::eq(users.c("name"), "ed"));

    let compiled = Compiler::mysql(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE addresses, users SET addresses.email_address=users.name \
         WHERE users.id = addresses.user_id AND users.name = %s"
    );
    assert!(compiled.defaults.is_empty());
}

#[test]
fn explicit_value_suppresses_generator() {
    let mut schema = Schema::default();
    let users = schema
        .build_table("users")
        .column("id", Type::I64)
        .primary_key()
        .column("name", Type::String)
        .column("some_update", Type::String)
        .on_update("a")
        .column("other_update", Type::String)
        .on_update("b")
        .finish();
    let users = schema.table(users);

    let stmt = Update::new(users)
        .set(users.c("name"), "ed")
        .set(users.c("some_update"), "explicit")
        .filter(Expr::eq(users.c("id"), 5));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name, some_update=:some_update, other_update=:other_update \
         WHERE users.id = :id_1"
    );
    assert_eq!(
        compiled.defaults.prefetch_for(users),
        [Prefetch {
            column: users.c("other_update"),
            value: Value::from("b"),
        }]
    );
    assert_eq!(compiled.param("some_update"), Some(&Value::from("explicit")));
}

#[test]
fn explicit_value_suppresses_generator_of_secondary_table() {
    let mut schema = Schema::default();
    let users = schema
        .build_table("users")
        .column("id", Type::I64)
        .primary_key()
        .column("name", Type::String)
        .column("some_update", Type::String)
        .on_update("a")
        .column("other_update", Type::String)
        .on_update("b")
        .finish();
    let addresses = schema
        .build_table("addresses")
        .column("id", Type::I64)
        .primary_key()
        .column("user_id", Type::I64)
        .column("email_address", Type::String)
        .finish();
    let users = schema.table(users);
    let addresses = schema.table(addresses);

    let stmt = Update::new(addresses)
        .set(addresses.c("email_address"), users.c("name"))
        .set(users.c("name"), "ed2")
        .set(users.c("some_update"), "explicit")
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")));

    let compiled = Compiler::mysql(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE addresses, users SET addresses.email_address=users.name, users.name=%s, \
         users.some_update=%s, users.other_update=%s WHERE users.id = addresses.user_id"
    );
    assert_eq!(
        compiled.defaults.prefetch_for(users),
        [Prefetch {
            column: users.c("other_update"),
            value: Value::from("b"),
        }]
    );
    assert!(compiled.defaults.prefetch_for(addresses).is_empty());
    assert_eq!(
        compiled.values().cloned().collect::<Vec<_>>(),
        [
            Value::from("ed2"),
            Value::from("explicit"),
            Value::from("b")
        ]
    );
}

#[test]
fn single_table_prefetch() {
    let schema = defaults_schema();
    let users = schema.table(USERS);

    let stmt = Update::new(users)
        .set(users.c("name"), "ed")
        .filter(Expr::eq(users.c("id"), 7));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name, some_update=:some_update WHERE users.id = :id_1"
    );
    assert_eq!(compiled.defaults.prefetch_for(users).len(), 1);
    assert_eq!(compiled.defaults.postfetch().len(), 0);
}

#[test]
fn single_table_postfetch_with_returning() {
    let schema = defaults_schema();
    let users = schema.table(USERS);

    let stmt = Update::new(users)
        .set(users.c("name"), "ed")
        .filter(Expr::eq(users.c("id"), 7));

    let compiled = Compiler::postgresql(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=$1, some_update=$2 WHERE users.id = $3 \
         RETURNING users.some_update"
    );
    assert!(compiled.defaults.prefetch().is_empty());
    assert_eq!(
        compiled
            .defaults
            .postfetch_names(&schema)
            .collect::<Vec<_>>(),
        ["some_update"]
    );
    assert_eq!(compiled.param("some_update"), Some(&Value::from("im the update")));
}

#[test]
fn multi_table_target_is_prefetched() {
    let schema = defaults_schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let stmt = Update::new(users)
        .set(users.c("name"), addresses.c("email_address"))
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")));

    let compiled = Compiler::postgresql(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=addresses.email_address, some_update=$1 \
         FROM addresses WHERE users.id = addresses.user_id"
    );
    assert_eq!(compiled.defaults.prefetch_for(users).len(), 1);
    assert_eq!(compiled.defaults.postfetch().len(), 0);
}

#[test]
fn generated_columns_alone_make_a_statement() {
    let schema = defaults_schema();
    let users = schema.table(USERS);

    let stmt = Update::new(users).filter(Expr::eq(users.c("id"), 7));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET some_update=:some_update WHERE users.id = :id_1"
    );
}

#[test]
fn callable_generator_runs_per_compile() {
    let counter = Arc::new(AtomicI64::new(0));

    let mut schema = Schema::default();
    let widgets = schema
        .build_table("widgets")
        .column("id", Type::I64)
        .primary_key()
        .column("name", Type::String)
        .column("version", Type::I64)
        .on_update_with({
            let counter = counter.clone();
            move || Value::from(counter.fetch_add(1, Ordering::SeqCst) + 1)
        })
        .finish();
    let widgets = schema.table(widgets);

    let stmt = Update::new(widgets)
        .set(widgets.c("name"), "gear")
        .filter(Expr::eq(widgets.c("id"), 1));

    let compiler = Compiler::new(&schema, &Dialect::DEFAULT);

    let first = compiler.compile(&stmt).unwrap();
    let second = compiler.compile(&stmt).unwrap();

    assert_eq!(first.sql, second.sql);
    assert_eq!(first.param("version"), Some(&Value::I64(1)));
    assert_eq!(second.param("version"), Some(&Value::I64(2)));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}
