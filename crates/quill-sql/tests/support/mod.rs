#![allow(dead_code)]

use quill_core::{
    schema::{TableId, Type},
    Schema,
};

pub const USERS: TableId = TableId(0);
pub const ADDRESSES: TableId = TableId(1);
pub const DINGALINGS: TableId = TableId(2);

/// users, addresses and dingalings, linked by foreign keys.
pub fn schema() -> Schema {
    let mut schema = Schema::default();

    schema
        .build_table("users")
        .column("id", Type::I64)
        .primary_key()
        .column("name", Type::String)
        .finish();

    schema
        .build_table("addresses")
        .column("id", Type::I64)
        .primary_key()
        .column("user_id", Type::I64)
        .column("name", Type::String)
        .column("email_address", Type::String)
        .finish();

    schema
        .build_table("dingalings")
        .column("id", Type::I64)
        .primary_key()
        .column("address_id", Type::I64)
        .column("data", Type::String)
        .finish();

    schema
}

/// users with an `onupdate` column, and addresses without one.
pub fn defaults_schema() -> Schema {
    let mut schema = Schema::default();

    schema
        .build_table("users")
        .column("id", Type::I64)
        .primary_key()
        .column("name", Type::String)
        .column("some_update", Type::String)
        .nullable()
        .on_update("im the update")
        .finish();

    schema
        .build_table("addresses")
        .column("id", Type::I64)
        .primary_key()
        .column("user_id", Type::I64)
        .column("email_address", Type::String)
        .finish();

    schema
}
