use super::*;

/// Arithmetic or bitwise combination of two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCombine {
    pub lhs: Box<Expr>,
    pub connector: Connector,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn combine(lhs: impl Into<Self>, connector: Connector, rhs: impl Into<Self>) -> Self {
        ExprCombine {
            lhs: Box::new(lhs.into()),
            connector,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }
}

impl From<ExprCombine> for Expr {
    fn from(value: ExprCombine) -> Self {
        Self::Combine(value)
    }
}
