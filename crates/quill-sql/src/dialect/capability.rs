/// Statement shapes a database accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// `UPDATE t SET c=.. FROM a, b WHERE ..`
    pub correlated_from_update: bool,

    /// `UPDATE t, a SET t.c=.., a.d=.. WHERE ..`. Also the only way to
    /// write to more than one table in a single statement.
    pub multi_table_update: bool,

    /// Use the multi-table form even when `UPDATE .. FROM` is available.
    pub prefer_multi_table_update: bool,

    /// A single-table UPDATE can return the target's generated columns in
    /// the same round trip (`RETURNING`), so `onupdate` columns of the target
    /// are read back instead of being reported as prefetched.
    pub postfetch_onupdate: bool,
}

impl Capability {
    pub const DEFAULT: Self = Self {
        correlated_from_update: true,
        multi_table_update: false,
        prefer_multi_table_update: false,
        postfetch_onupdate: false,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        postfetch_onupdate: true,
        ..Self::DEFAULT
    };

    /// SQLite capabilities. `UPDATE .. FROM` requires SQLite 3.33.
    pub const SQLITE: Self = Self::DEFAULT;

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        correlated_from_update: false,
        multi_table_update: true,
        ..Self::DEFAULT
    };

    pub const ANSI: Self = Self {
        correlated_from_update: false,
        ..Self::DEFAULT
    };
}
