use super::*;

/// A `SELECT` over a single table.
///
/// Only the shapes needed for subqueries, `EXISTS` predicates and simple
/// reads are represented.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Projected expressions. An empty projection selects `*`.
    pub select: Vec<Expr>,

    /// Source table
    pub from: String,

    pub filter: Option<Expr>,

    pub order_by: Vec<OrderByExpr>,

    pub limit: Option<Limit>,

    pub lock: Option<Lock>,
}

impl Query {
    pub fn new(from: impl Into<String>) -> Query {
        Query {
            select: vec![],
            from: from.into(),
            filter: None,
            order_by: vec![],
            limit: None,
            lock: None,
        }
    }

    pub fn select(mut self, select: impl IntoIterator<Item = impl Into<Expr>>) -> Query {
        self.select = select.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Query {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<Expr>, order: Direction) -> Query {
        self.order_by.push(OrderByExpr {
            expr: expr.into(),
            order: Some(order),
        });
        self
    }

    pub fn limit(mut self, limit: i64) -> Query {
        self.limit = Some(Limit {
            limit: Some(limit),
            offset: self.limit.and_then(|limit| limit.offset),
        });
        self
    }

    pub fn offset(mut self, offset: i64) -> Query {
        self.limit = Some(Limit {
            limit: self.limit.and_then(|limit| limit.limit),
            offset: Some(offset),
        });
        self
    }

    pub fn lock(mut self, lock: Lock) -> Query {
        self.lock = Some(lock);
        self
    }

    /// Removes any row-limiting clause.
    pub fn clear_limit(&mut self) {
        self.limit = None;
    }
}

/// `LIMIT` / `OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// `None` means no limit.
    pub limit: Option<i64>,

    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The expression
    pub expr: Expr,

    /// Ascending or descending
    pub order: Option<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Row-level lock requested by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lock {
    Update,
    Share,
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Statement::Query(value)
    }
}
