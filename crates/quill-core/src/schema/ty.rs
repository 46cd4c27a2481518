use crate::stmt::Value;

/// Column type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Bool,
    I64,
    F64,
    String,
}

impl Type {
    /// Returns `true` if `value` can be stored in a column of this type.
    /// `NULL` is accepted by every type; nullability is checked separately.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (Type::Bool, Value::Bool(_))
                | (Type::I64, Value::I64(_))
                | (Type::F64, Value::F64(_) | Value::I64(_))
                | (Type::String, Value::String(_))
        )
    }
}
