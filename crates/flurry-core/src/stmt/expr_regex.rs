use super::*;

/// Matches a string expression against a regular expression.
///
/// Whether the pattern must match the whole string is a property of the
/// dialect, see `Capability::regex_implicitly_anchored`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRegex {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub case_insensitive: bool,
}

impl Expr {
    pub fn regex(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprRegex {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            case_insensitive: false,
        }
        .into()
    }

    pub fn iregex(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprRegex {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            case_insensitive: true,
        }
        .into()
    }
}

impl From<ExprRegex> for Expr {
    fn from(value: ExprRegex) -> Self {
        Self::Regex(value)
    }
}
