use super::*;
use crate::schema::{Field, FieldKind};

/// Cast an expression to the storage type of a field kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    pub expr: Box<Expr>,

    pub kind: FieldKind,

    pub max_length: Option<u64>,

    /// Precision and scale for decimal kinds.
    pub decimal: Option<(u32, u32)>,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, kind: FieldKind) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            kind,
            max_length: None,
            decimal: None,
        }
        .into()
    }

    /// Cast to the type of the given field, including its length and
    /// precision.
    pub fn cast_to_field(expr: impl Into<Self>, field: &Field) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            kind: field.kind.clone(),
            max_length: field.max_length,
            decimal: field.max_digits.zip(field.decimal_places),
        }
        .into()
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
