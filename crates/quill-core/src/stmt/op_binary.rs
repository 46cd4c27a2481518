use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        use BinaryOp::*;

        match self {
            Or => 1,
            And => 2,
            Eq | Ne | Ge | Gt | Le | Lt => 5,
            Add | Sub => 7,
            Mul | Div => 8,
        }
    }

    /// `a op (b op c)` == `(a op b) op c`
    pub fn is_associative(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Add | Self::Mul)
    }

    pub fn as_str(self) -> &'static str {
        use BinaryOp::*;

        match self {
            Eq => "=",
            Ne => "!=",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
            And => "AND",
            Or => "OR",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
