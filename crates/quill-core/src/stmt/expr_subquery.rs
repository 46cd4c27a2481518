use super::{Expr, Subquery};

use by_address::ByAddress;
use std::{fmt, sync::Arc};

/// A subquery used as a scalar value, e.g. `SET name=(SELECT ..)`.
///
/// Tables already present in the enclosing statement are correlated rather
/// than repeated in the subquery's FROM list.
#[derive(Clone, PartialEq)]
pub struct ExprSubquery {
    pub subquery: ByAddress<Arc<Subquery>>,
}

impl Expr {
    pub fn subquery(subquery: &Arc<Subquery>) -> Self {
        ExprSubquery {
            subquery: ByAddress(subquery.clone()),
        }
        .into()
    }
}

impl From<ExprSubquery> for Expr {
    fn from(value: ExprSubquery) -> Self {
        Self::Subquery(value)
    }
}

impl fmt::Debug for ExprSubquery {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("ExprSubquery")
            .field(&*self.subquery.0)
            .finish()
    }
}
