use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCollate {
    pub expr: Box<Expr>,

    /// Collation specification, e.g. `en-ci`.
    pub collation: String,
}

impl Expr {
    pub fn collate(expr: impl Into<Self>, collation: impl Into<String>) -> Self {
        ExprCollate {
            expr: Box::new(expr.into()),
            collation: collation.into(),
        }
        .into()
    }
}

impl From<ExprCollate> for Expr {
    fn from(value: ExprCollate) -> Self {
        Self::Collate(value)
    }
}
