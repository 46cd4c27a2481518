use super::{Formatter, ToSql};
use crate::ParamStyle;

use quill_core::stmt::Value;

/// Receives bind parameters in the order they appear in the SQL text.
pub trait Params {
    fn push(&mut self, name: &str, value: &Value) -> Placeholder;
}

/// One-based position of a parameter in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// A bind parameter of a compiled statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

impl Params for Vec<Param> {
    fn push(&mut self, name: &str, value: &Value) -> Placeholder {
        self.push(Param {
            name: name.to_string(),
            value: value.clone(),
        });
        Placeholder(self.len())
    }
}

/// A placeholder as written in the SQL text
pub(super) struct Bind<'a> {
    pub(super) name: &'a str,
    pub(super) placeholder: Placeholder,
}

impl ToSql for Bind<'_> {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match f.serializer.dialect.param_style {
            ParamStyle::Named => write!(f.dst, ":{}", self.name),
            ParamStyle::Pyformat => write!(f.dst, "%({})s", self.name),
            ParamStyle::Format => write!(f.dst, "%s"),
            ParamStyle::Qmark => write!(f.dst, "?"),
            ParamStyle::Numeric => write!(f.dst, "${}", self.placeholder.0),
        }
        .unwrap()
    }
}
