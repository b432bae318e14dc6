use super::*;

/// Cast a timestamp to its date or its time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprDateCast {
    pub expr: Box<Expr>,

    /// Either [`TemporalKind::Date`] or [`TemporalKind::Time`].
    pub output: TemporalKind,

    pub tz: Option<String>,
}

impl Expr {
    pub fn cast_date(expr: impl Into<Self>, tz: Option<String>) -> Self {
        ExprDateCast {
            expr: Box::new(expr.into()),
            output: TemporalKind::Date,
            tz,
        }
        .into()
    }

    pub fn cast_time(expr: impl Into<Self>, tz: Option<String>) -> Self {
        ExprDateCast {
            expr: Box::new(expr.into()),
            output: TemporalKind::Time,
            tz,
        }
        .into()
    }
}

impl From<ExprDateCast> for Expr {
    fn from(value: ExprDateCast) -> Self {
        Self::DateCast(value)
    }
}
