use crate::{Defaults, Form, Param};

use quill_core::stmt::Value;

/// A compiled UPDATE statement.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// SQL text, without a trailing semicolon
    pub sql: String,

    /// Bind parameters in placeholder order
    pub params: Vec<Param>,

    /// The statement shape that was chosen for the dialect
    pub form: Form,

    /// Values generated by `onupdate` columns
    pub defaults: Defaults,
}

impl Compiled {
    /// Parameter values in placeholder order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.params.iter().map(|param| &param.value)
    }

    /// Parameter names in placeholder order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.params.iter().map(|param| param.name.as_str())
    }

    /// Looks up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }
}
