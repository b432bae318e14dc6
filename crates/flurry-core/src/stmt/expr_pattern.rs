use super::*;

/// Matches a string expression against a `LIKE` pattern built from `rhs`.
///
/// `rhs` is matched literally: wildcard characters it contains are escaped
/// before the lookup's own wildcards are added.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPattern {
    pub lookup: Lookup,
    pub expr: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    IExact,
    Contains,
    IContains,
    StartsWith,
    IStartsWith,
    EndsWith,
    IEndsWith,
}

impl Lookup {
    pub fn is_case_insensitive(self) -> bool {
        matches!(
            self,
            Self::IExact | Self::IContains | Self::IStartsWith | Self::IEndsWith
        )
    }

    /// A wildcard precedes the needle.
    pub fn leading_wildcard(self) -> bool {
        matches!(
            self,
            Self::Contains | Self::IContains | Self::EndsWith | Self::IEndsWith
        )
    }

    /// A wildcard follows the needle.
    pub fn trailing_wildcard(self) -> bool {
        matches!(
            self,
            Self::Contains | Self::IContains | Self::StartsWith | Self::IStartsWith
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::IExact => "iexact",
            Self::Contains => "contains",
            Self::IContains => "icontains",
            Self::StartsWith => "startswith",
            Self::IStartsWith => "istartswith",
            Self::EndsWith => "endswith",
            Self::IEndsWith => "iendswith",
        }
    }
}

impl Expr {
    pub fn pattern(lookup: Lookup, expr: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprPattern {
            lookup,
            expr: Box::new(expr.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn contains(expr: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::pattern(Lookup::Contains, expr, rhs)
    }

    pub fn starts_with(expr: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::pattern(Lookup::StartsWith, expr, rhs)
    }

    pub fn ends_with(expr: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::pattern(Lookup::EndsWith, expr, rhs)
    }
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}
