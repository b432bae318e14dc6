use super::*;

/// An aggregate function call.
///
/// ```text
/// COUNT(*)                           // args is empty
/// COUNT(DISTINCT x)
/// COUNT(CASE WHEN f THEN x END)      // filtered
/// LISTAGG(x, ', ')                   // string aggregation, args = [x, delimiter]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAggregate {
    pub kind: AggregateKind,

    /// Arguments. An empty list means `*`.
    pub args: Vec<Expr>,

    pub distinct: bool,

    /// Only rows for which the filter holds are aggregated.
    pub filter: Option<Box<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    StdDevPop,
    StdDevSamp,
    VarPop,
    VarSamp,

    /// Concatenate the values of a string column, separated by a delimiter.
    StringAgg,
}

impl ExprAggregate {
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(Box::new(filter.into()));
        self
    }
}

impl Expr {
    pub fn aggregate(kind: AggregateKind, args: impl IntoIterator<Item = impl Into<Self>>) -> ExprAggregate {
        ExprAggregate {
            kind,
            args: args.into_iter().map(Into::into).collect(),
            distinct: false,
            filter: None,
        }
    }

    pub fn count_star() -> Self {
        ExprAggregate {
            kind: AggregateKind::Count,
            args: vec![],
            distinct: false,
            filter: None,
        }
        .into()
    }

    pub fn count(expr: impl Into<Self>) -> Self {
        Self::aggregate(AggregateKind::Count, [expr]).into()
    }

    pub fn string_agg(expr: impl Into<Self>, delimiter: impl Into<Self>) -> Self {
        Self::aggregate(AggregateKind::StringAgg, [expr.into(), delimiter.into()]).into()
    }
}

impl AggregateKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Sum => "Sum",
            Self::Avg => "Avg",
            Self::Min => "Min",
            Self::Max => "Max",
            Self::StdDevPop => "StdDevPop",
            Self::StdDevSamp => "StdDevSamp",
            Self::VarPop => "VarPop",
            Self::VarSamp => "VarSamp",
            Self::StringAgg => "StringAgg",
        }
    }
}

impl From<ExprAggregate> for Expr {
    fn from(value: ExprAggregate) -> Self {
        Self::Aggregate(value)
    }
}
