use super::{Subquery, TableAlias};
use crate::schema::{Table, TableId};

use by_address::ByAddress;
use std::{fmt, sync::Arc};

/// Something a column can be selected from.
///
/// Aliased tables and derived tables are compared by identity: two separate
/// `addresses.alias()` calls produce two distinct references even though
/// they look the same.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TableRef {
    /// A schema table
    Table(TableId),

    /// A schema table under an alias, `addresses AS addresses_1`
    Alias(ByAddress<Arc<TableAlias>>),

    /// A derived table, `(SELECT ..) AS anon_1`
    Subquery(ByAddress<Arc<Subquery>>),
}

impl TableRef {
    pub fn as_table(&self) -> Option<TableId> {
        match self {
            Self::Table(table) => Some(*table),
            _ => None,
        }
    }

    pub fn as_subquery(&self) -> Option<&Arc<Subquery>> {
        match self {
            Self::Subquery(subquery) => Some(&subquery.0),
            _ => None,
        }
    }
}

impl From<TableId> for TableRef {
    fn from(value: TableId) -> Self {
        Self::Table(value)
    }
}

impl From<&Table> for TableRef {
    fn from(value: &Table) -> Self {
        Self::Table(value.id)
    }
}

impl From<&Arc<TableAlias>> for TableRef {
    fn from(value: &Arc<TableAlias>) -> Self {
        Self::Alias(ByAddress(value.clone()))
    }
}

impl From<&Arc<Subquery>> for TableRef {
    fn from(value: &Arc<Subquery>) -> Self {
        Self::Subquery(ByAddress(value.clone()))
    }
}

impl fmt::Debug for TableRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(table) => fmt::Debug::fmt(table, fmt),
            Self::Alias(alias) => fmt::Debug::fmt(&*alias.0, fmt),
            Self::Subquery(subquery) => write!(
                fmt,
                "Subquery({:?} @ {:p})",
                subquery.0.name,
                Arc::as_ptr(&subquery.0)
            ),
        }
    }
}
