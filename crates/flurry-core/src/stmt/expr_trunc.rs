use super::*;

/// Truncate a date, time or timestamp to the given precision.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprTrunc {
    pub kind: TruncKind,

    pub expr: Box<Expr>,

    /// The type of the truncated value. Time values are cast back to `TIME`.
    pub output: TemporalKind,

    pub tz: Option<String>,
}

impl Expr {
    pub fn trunc(kind: TruncKind, expr: impl Into<Self>, output: TemporalKind) -> Self {
        ExprTrunc {
            kind,
            expr: Box::new(expr.into()),
            output,
            tz: None,
        }
        .into()
    }
}

impl ExprTrunc {
    pub fn in_tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }
}

impl From<ExprTrunc> for Expr {
    fn from(value: ExprTrunc) -> Self {
        Self::Trunc(value)
    }
}
