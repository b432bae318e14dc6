use super::*;

/// `lhs - rhs` for two temporal values, in microseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprTemporalSub {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,

    /// The type of both operands.
    pub kind: TemporalKind,
}

impl Expr {
    pub fn temporal_sub(lhs: impl Into<Self>, rhs: impl Into<Self>, kind: TemporalKind) -> Self {
        ExprTemporalSub {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
            kind,
        }
        .into()
    }
}

impl From<ExprTemporalSub> for Expr {
    fn from(value: ExprTemporalSub) -> Self {
        Self::TemporalSub(value)
    }
}
