use super::*;

/// A scalar function call.
///
/// The function is identified by its portable kind; how (and whether) each
/// kind is rendered is decided by the dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub kind: FuncKind,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncKind {
    Ceil,
    Coalesce,

    /// Concatenate two strings. A null operand is treated as an empty string.
    Concat,
    CurrentTimestamp,
    JsonObject,
    Length,
    Lower,
    Random,
    Sha224,
    Sha256,
    Sha384,
    Sha512,

    /// 1-based position of `args[1]` within `args[0]`, or 0.
    StrIndex,
    Upper,
}

impl FuncKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ceil => "Ceil",
            Self::Coalesce => "Coalesce",
            Self::Concat => "Concat",
            Self::CurrentTimestamp => "CurrentTimestamp",
            Self::JsonObject => "JsonObject",
            Self::Length => "Length",
            Self::Lower => "Lower",
            Self::Random => "Random",
            Self::Sha224 => "Sha224",
            Self::Sha256 => "Sha256",
            Self::Sha384 => "Sha384",
            Self::Sha512 => "Sha512",
            Self::StrIndex => "StrIndex",
            Self::Upper => "Upper",
        }
    }
}

impl Expr {
    pub fn func(kind: FuncKind, args: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        ExprFunc {
            kind,
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    pub fn concat(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::func(FuncKind::Concat, [lhs.into(), rhs.into()])
    }

    pub fn str_index(haystack: impl Into<Self>, needle: impl Into<Self>) -> Self {
        Self::func(FuncKind::StrIndex, [haystack.into(), needle.into()])
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
