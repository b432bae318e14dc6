use super::*;

/// Tests whether a subquery returns any rows.
///
/// Returns `true` if the subquery produces at least one row (or no rows when
/// negated).
#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    pub query: Box<Query>,

    pub negated: bool,
}

impl Expr {
    pub fn exists(query: Query) -> Self {
        ExprExists {
            query: Box::new(query),
            negated: false,
        }
        .into()
    }

    pub fn not_exists(query: Query) -> Self {
        ExprExists {
            query: Box::new(query),
            negated: true,
        }
        .into()
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Self::Exists(value)
    }
}
