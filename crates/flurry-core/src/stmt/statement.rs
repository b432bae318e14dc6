use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Query),
    Insert(Insert),
}

impl Statement {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::Insert(_) => "insert",
        }
    }
}
