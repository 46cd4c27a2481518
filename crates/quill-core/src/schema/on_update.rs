use crate::stmt::Value;

use std::{fmt, sync::Arc};

/// Client-side generator for a column's value on UPDATE.
///
/// Generators fire only for tables the statement actually writes, and only
/// for columns the statement does not assign explicitly.
#[derive(Clone)]
pub enum OnUpdate {
    /// A fixed value
    Value(Value),

    /// Invoked once per compiled statement
    Func(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl OnUpdate {
    pub fn func(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }

    /// Computes the value to write.
    pub fn eval(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Func(f) => f(),
        }
    }
}

impl fmt::Debug for OnUpdate {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt.debug_tuple("Value").field(value).finish(),
            Self::Func(_) => fmt.write_str("Func(..)"),
        }
    }
}
