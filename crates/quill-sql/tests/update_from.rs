mod support;
use support::*;

use quill_core::stmt::{Expr, Select, Update, Value};
use quill_sql::{Compiler, Dialect, Form, ParamStyle};

use pretty_assertions::assert_eq;

fn render_table(schema: &quill_core::Schema) -> Update {
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    Update::new(users)
        .set(users.c("name"), "newname")
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")))
        .filter(Expr::eq(addresses.c("email_address"), "e1"))
}

#[test]
fn update_from_single_extra_table() {
    let schema = schema();
    let stmt = render_table(&schema);

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name FROM addresses \
         WHERE users.id = addresses.user_id AND addresses.email_address = :email_address_1"
    );
    assert_eq!(compiled.form, Form::CorrelatedFrom);
    assert_eq!(compiled.names().collect::<Vec<_>>(), ["name", "email_address_1"]);
    assert_eq!(
        compiled.values().cloned().collect::<Vec<_>>(),
        [Value::from("newname"), Value::from("e1")]
    );
}

#[test]
fn update_from_two_extra_tables() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);
    let dingalings = schema.table(DINGALINGS);

    let stmt = Update::new(users)
        .set(users.c("name"), "newname")
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")))
        .filter(Expr::eq(addresses.c("id"), dingalings.c("address_id")))
        .filter(Expr::eq(dingalings.c("id"), 2));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name FROM addresses, dingalings \
         WHERE users.id = addresses.user_id AND addresses.id = dingalings.address_id \
         AND dingalings.id = :id_1"
    );
    assert_eq!(compiled.names().collect::<Vec<_>>(), ["name", "id_1"]);
    assert_eq!(compiled.param("id_1"), Some(&Value::I64(2)));
}

#[test]
fn set_value_from_extra_table() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let stmt = Update::new(addresses)
        .set(addresses.c("email_address"), users.c("name"))
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")))
        .filter(Expr::eq(users.c("name"), "ed"));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE addresses SET email_address=users.name FROM users \
         WHERE users.id = addresses.user_id AND users.name = :name_1"
    );
    assert_eq!(compiled.names().collect::<Vec<_>>(), ["name_1"]);
    assert_eq!(compiled.param("name_1"), Some(&Value::from("ed")));
}

#[test]
fn replaced_value_does_not_reference_its_table() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let stmt = Update::new(addresses)
        .set("email_address", users.c("name"))
        .set(addresses.c("email_address"), "x");

    for dialect in [&Dialect::DEFAULT, &Dialect::ANSI] {
        let compiled = Compiler::new(&schema, dialect).compile(&stmt).unwrap();

        assert_eq!(compiled.sql, "UPDATE addresses SET email_address=:email_address");
        assert_eq!(compiled.form, Form::SingleTable);
        assert_eq!(compiled.values().cloned().collect::<Vec<_>>(), [Value::from("x")]);
    }
}

#[test]
fn replaced_value_does_not_reference_its_derived_table() {
    let schema = schema();
    let addresses = schema.table(ADDRESSES);

    let anon = Select::new([addresses.c("email_address")])
        .filter(Expr::eq(addresses.c("id"), 7))
        .alias(&schema);

    let stmt = Update::new(addresses)
        .set("email_address", anon.c("email_address"))
        .set(addresses.c("email_address"), "x")
        .filter(Expr::eq(addresses.c("id"), 3));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE addresses SET email_address=:email_address WHERE addresses.id = :id_1"
    );
    assert_eq!(compiled.names().collect::<Vec<_>>(), ["id_1", "email_address"]);
}

#[test]
fn update_from_derived_table() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let anon = Select::new([
        addresses.c("id"),
        addresses.c("user_id"),
        addresses.c("email_address"),
    ])
    .filter(Expr::eq(addresses.c("id"), 7))
    .alias(&schema);

    let stmt = Update::new(users)
        .set(users.c("name"), "newname")
        .filter(Expr::eq(users.c("id"), anon.c("user_id")))
        .filter(Expr::eq(anon.c("email_address"), "e1"));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name FROM (SELECT addresses.id AS id, \
         addresses.user_id AS user_id, addresses.email_address AS email_address \
         FROM addresses WHERE addresses.id = :id_1) AS anon_1 \
         WHERE users.id = anon_1.user_id AND anon_1.email_address = :email_address_1"
    );
    assert_eq!(
        compiled.names().collect::<Vec<_>>(),
        ["name", "id_1", "email_address_1"]
    );
}

#[test]
fn named_derived_table_keeps_its_name() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let recent = Select::new([addresses.c("user_id")])
        .filter(Expr::gt(addresses.c("id"), 100))
        .alias_as(&schema, "recent");

    let stmt = Update::new(users)
        .set(users.c("name"), "active")
        .filter(Expr::eq(users.c("id"), recent.c("user_id")));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name FROM (SELECT addresses.user_id AS user_id \
         FROM addresses WHERE addresses.id > :id_1) AS recent \
         WHERE users.id = recent.user_id"
    );
}

#[test]
fn update_from_aliased_table() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);
    let other = addresses.alias();

    let stmt = Update::new(addresses)
        .set(addresses.c("email_address"), users.c("name"))
        .filter(Expr::eq(users.c("id"), addresses.c("user_id")))
        .filter(Expr::eq(other.c("id"), addresses.c("id")));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE addresses SET email_address=users.name FROM users, addresses AS addresses_1 \
         WHERE users.id = addresses.user_id AND addresses_1.id = addresses.id"
    );
    assert!(compiled.params.is_empty());
}

#[test]
fn scalar_subquery_correlates_to_target() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let email = Select::new([addresses.c("email_address")])
        .filter(Expr::eq(addresses.c("user_id"), users.c("id")))
        .filter(Expr::eq(addresses.c("id"), 3))
        .alias(&schema);

    let stmt = Update::new(users)
        .set(users.c("name"), Expr::subquery(&email))
        .filter(Expr::eq(users.c("id"), 5));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=(SELECT addresses.email_address FROM addresses \
         WHERE addresses.user_id = users.id AND addresses.id = :id_2) \
         WHERE users.id = :id_1"
    );
    assert_eq!(compiled.form, Form::SingleTable);
    assert_eq!(compiled.names().collect::<Vec<_>>(), ["id_2", "id_1"]);
}

#[test]
fn update_from_postgresql() {
    let schema = schema();
    let stmt = render_table(&schema);

    let compiled = Compiler::postgresql(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=$1 FROM addresses \
         WHERE users.id = addresses.user_id AND addresses.email_address = $2"
    );
    assert_eq!(
        compiled.values().cloned().collect::<Vec<_>>(),
        [Value::from("newname"), Value::from("e1")]
    );
}

#[test]
fn update_from_sqlite() {
    let schema = schema();
    let stmt = render_table(&schema);

    let compiled = Compiler::sqlite(&schema).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=? FROM addresses \
         WHERE users.id = addresses.user_id AND addresses.email_address = ?"
    );
}

#[test]
fn update_from_pyformat() {
    let schema = schema();
    let stmt = render_table(&schema);

    let dialect = Dialect {
        name: "psycopg2",
        param_style: ParamStyle::Pyformat,
        ..Dialect::POSTGRESQL
    };
    let compiled = Compiler::new(&schema, &dialect).compile(&stmt).unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=%(name)s FROM addresses \
         WHERE users.id = addresses.user_id AND addresses.email_address = %(email_address_1)s"
    );
}

#[test]
fn where_terms_keep_insertion_order() {
    let schema = schema();
    let users = schema.table(USERS);
    let addresses = schema.table(ADDRESSES);

    let stmt = Update::new(users)
        .set(users.c("name"), "newname")
        .filter(Expr::eq(addresses.c("email_address"), "e1"))
        .filter(Expr::or(
            Expr::eq(users.c("id"), addresses.c("user_id")),
            Expr::eq(users.c("id"), 4),
        ));

    let compiled = Compiler::new(&schema, &Dialect::DEFAULT)
        .compile(&stmt)
        .unwrap();

    assert_eq!(
        compiled.sql,
        "UPDATE users SET name=:name FROM addresses \
         WHERE addresses.email_address = :email_address_1 \
         AND (users.id = addresses.user_id OR users.id = :id_1)"
    );
}
