use super::{aggregate, combine, datetime, func, json, lookup, Comma, Delimited, Formatter, Ident, Literal, Period, ToSql};

use flurry_core::{stmt, Error, Result};

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            Aggregate(expr) => aggregate::to_sql(expr, f)?,
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            BinaryOp(expr) => {
                if expr.lhs.is_value_null() || expr.rhs.is_value_null() {
                    return Err(Error::invalid_statement(
                        "comparison with NULL is never true; use IS NULL",
                    ));
                }

                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Cast(expr) => {
                let ty = f.dialect().cast_type(&expr.kind, expr.max_length, expr.decimal)?;
                fmt!(f, "CAST(" expr.expr " AS " ty.as_str() ")");
            }
            Collate(expr) => {
                fmt!(f, "COLLATE(" expr.expr ", " Literal(&expr.collation) ")");
            }
            Column(expr) => match &expr.table {
                Some(table) => fmt!(f, Period([Ident(table), Ident(&expr.name)])),
                None => fmt!(f, Ident(&expr.name)),
            },
            Combine(expr) => combine::to_sql(expr, f)?,
            DateCast(expr) => datetime::date_cast(expr, f)?,
            Exists(expr) => {
                // LIMIT is not allowed in a subquery used by EXISTS. ORDER BY is
                // left in place.
                let mut query = (*expr.query).clone();
                query.clear_limit();

                if expr.negated {
                    fmt!(f, "NOT ");
                }

                let query = &query;
                fmt!(f, "EXISTS(" query ")");
            }
            Extract(expr) => datetime::extract(expr, f)?,
            Func(expr) => func::to_sql(expr, f)?,
            HasKey(expr) => json::has_key(expr, f)?,
            InList(expr) => {
                if expr.list.is_empty() {
                    return Err(Error::invalid_statement("IN list is empty"));
                }

                fmt!(f, expr.expr " IN (" Comma(&expr.list) ")");
            }
            InSubquery(expr) => {
                fmt!(f, expr.expr " IN (" expr.query ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            JsonKey(expr) => json::key_transform(expr, f)?,
            Not(expr) => {
                fmt!(f, "NOT (" expr.expr ")");
            }
            Or(expr) => {
                fmt!(f, "(" Delimited(&expr.operands, " OR ") ")");
            }
            Pattern(expr) => lookup::pattern(expr, f)?,
            Record(expr) => {
                fmt!(f, "(" Comma(&expr.fields) ")");
            }
            Regex(expr) => lookup::regex(expr, f)?,
            Stmt(expr) => {
                fmt!(f, "(" expr.query ")");
            }
            TemporalSub(expr) => datetime::temporal_sub(expr, f)?,
            Trunc(expr) => datetime::trunc(expr, f)?,
            Value(value) => value.to_sql(f)?,
        }

        Ok(())
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        });
        Ok(())
    }
}
