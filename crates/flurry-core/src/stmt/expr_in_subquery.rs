use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInSubquery {
    pub expr: Box<Expr>,
    pub query: Box<Query>,
}

impl Expr {
    pub fn in_subquery(expr: impl Into<Self>, query: Query) -> Self {
        ExprInSubquery {
            expr: Box::new(expr.into()),
            query: Box::new(query),
        }
        .into()
    }
}

impl From<ExprInSubquery> for Expr {
    fn from(value: ExprInSubquery) -> Self {
        Self::InSubquery(value)
    }
}
