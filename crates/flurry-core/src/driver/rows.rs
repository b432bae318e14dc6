use crate::stmt::ValueRecord;

/// Rows fetched from a statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rows {
    /// Column names, in projection order.
    pub columns: Vec<String>,

    pub rows: Vec<ValueRecord>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: Vec<ValueRecord>) -> Rows {
        Rows { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append the rows of another result. Column names are taken from the
    /// first non-empty result.
    pub fn extend(&mut self, other: Rows) {
        if self.columns.is_empty() {
            self.columns = other.columns;
        }
        self.rows.extend(other.rows);
    }
}

impl IntoIterator for Rows {
    type Item = ValueRecord;
    type IntoIter = std::vec::IntoIter<ValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
