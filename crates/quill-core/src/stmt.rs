mod expr;
pub use expr::Expr;

mod expr_alias;
pub use expr_alias::ExprAlias;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_param;
pub use expr_param::ExprParam;

mod expr_subquery;
pub use expr_subquery::ExprSubquery;

mod filter;
pub use filter::Filter;

mod op_binary;
pub use op_binary::BinaryOp;

mod select;
pub use select::{Select, Subquery};

mod table_alias;
pub use table_alias::TableAlias;

mod table_ref;
pub use table_ref::TableRef;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod values;
pub use values::{ValueKey, Values};

pub mod visit;
pub use visit::Visit;
