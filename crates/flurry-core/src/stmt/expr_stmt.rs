use super::*;

/// A scalar subquery.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub query: Box<Query>,
}

impl Expr {
    pub fn subquery(query: Query) -> Self {
        ExprStmt {
            query: Box::new(query),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}
