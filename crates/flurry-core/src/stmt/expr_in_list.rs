use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list(expr: impl Into<Self>, list: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        ExprInList {
            expr: Box::new(expr.into()),
            list: list.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
