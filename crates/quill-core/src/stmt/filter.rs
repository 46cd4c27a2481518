use super::Expr;

/// A WHERE clause: the conjunction of its terms, kept in the order they were
/// added.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub terms: Vec<Expr>,
}

impl Filter {
    pub fn push(&mut self, expr: Expr) {
        self.terms.push(expr);
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.terms.iter()
    }
}

impl<'a> IntoIterator for &'a Filter {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
