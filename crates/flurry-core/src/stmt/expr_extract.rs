use super::*;

/// Extract a component of a date or timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprExtract {
    pub part: DatePart,

    pub expr: Box<Expr>,

    /// Time zone the value is converted to before extraction.
    pub tz: Option<String>,
}

impl Expr {
    pub fn extract(part: DatePart, expr: impl Into<Self>) -> Self {
        ExprExtract {
            part,
            expr: Box::new(expr.into()),
            tz: None,
        }
        .into()
    }

    pub fn extract_in_tz(part: DatePart, expr: impl Into<Self>, tz: impl Into<String>) -> Self {
        ExprExtract {
            part,
            expr: Box::new(expr.into()),
            tz: Some(tz.into()),
        }
        .into()
    }
}

impl From<ExprExtract> for Expr {
    fn from(value: ExprExtract) -> Self {
        Self::Extract(value)
    }
}
