use super::Expr;
use crate::schema::ColumnId;

use indexmap::IndexMap;

/// The column an UPDATE value is written to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Column(ColumnId),

    /// A bare column name, resolved against the statement's tables at compile
    /// time.
    Name(String),
}

impl ValueKey {
    pub fn as_column(&self) -> Option<ColumnId> {
        match self {
            Self::Column(column) => Some(*column),
            Self::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Column(_) => None,
        }
    }
}

/// Ordered column-to-expression mapping of an UPDATE.
///
/// Inserting an existing key replaces its expression but keeps the key's
/// original position.
#[derive(Debug, Default, Clone)]
pub struct Values {
    entries: IndexMap<ValueKey, Expr>,
}

impl Values {
    pub fn insert(&mut self, key: impl Into<ValueKey>, expr: impl Into<Expr>) {
        self.entries.insert(key.into(), expr.into());
    }

    pub fn get(&self, key: &ValueKey) -> Option<&Expr> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, ValueKey, Expr> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a ValueKey, &'a Expr);
    type IntoIter = indexmap::map::Iter<'a, ValueKey, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, E> FromIterator<(K, E)> for Values
where
    K: Into<ValueKey>,
    E: Into<Expr>,
{
    fn from_iter<T: IntoIterator<Item = (K, E)>>(iter: T) -> Self {
        let mut values = Values::default();
        for (key, expr) in iter {
            values.insert(key, expr);
        }
        values
    }
}

impl From<ColumnId> for ValueKey {
    fn from(value: ColumnId) -> Self {
        Self::Column(value)
    }
}

impl From<&str> for ValueKey {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for ValueKey {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}
