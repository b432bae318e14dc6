use super::{Comma, Formatter, Ident, ToSql};

use flurry_core::{stmt, Error, Result};

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, "SELECT ");

        if self.select.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(&self.select));
        }

        fmt!(f, " FROM " Ident(&self.from));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        if let Some(limit) = &self.limit {
            fmt!(f, limit);
        }

        if let Some(lock) = self.lock {
            if !f.dialect().capability().select_for_update {
                return Err(Error::unsupported_feature("row-level locking (SELECT ... FOR UPDATE)"));
            }

            match lock {
                stmt::Lock::Update => fmt!(f, " FOR UPDATE"),
                stmt::Lock::Share => fmt!(f, " FOR SHARE"),
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, &self.expr);

        match self.order {
            Some(stmt::Direction::Asc) => fmt!(f, " ASC"),
            Some(stmt::Direction::Desc) => fmt!(f, " DESC"),
            None => {}
        }

        Ok(())
    }
}

/// `LIMIT n`, `LIMIT n OFFSET m` or, for an offset alone, `LIMIT null OFFSET m`.
impl ToSql for &stmt::Limit {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let offset = self.offset.filter(|offset| *offset != 0);

        match (self.limit, offset) {
            (Some(limit), _) => fmt!(f, " LIMIT " limit),
            (None, Some(_)) => fmt!(f, " LIMIT null"),
            (None, None) => {}
        }

        if let Some(offset) = offset {
            fmt!(f, " OFFSET " offset);
        }

        Ok(())
    }
}
