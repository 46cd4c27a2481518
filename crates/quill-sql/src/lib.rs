mod binder;
use binder::Bindings;

mod compiler;
pub use compiler::{Compiled, Compiler, Form};

pub mod defaults;
pub use defaults::{Defaults, Prefetch};

pub mod dialect;
pub use dialect::{Capability, Dialect, ParamStyle, Quoting};

pub mod resolve;
pub use resolve::Froms;

mod serializer;
pub use serializer::{Param, Params, Placeholder};
