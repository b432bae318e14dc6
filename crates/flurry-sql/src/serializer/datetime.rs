use super::{Formatter, ToSql};

use flurry_core::{
    stmt::{self, DatePart, TemporalKind},
    Error, Result,
};

/// An expression converted to a time zone, when one is given and the dialect
/// is time zone aware.
struct InTz<'a> {
    expr: &'a stmt::Expr,
    tz: Option<&'a str>,
}

impl ToSql for InTz<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self.tz {
            Some(tz) if f.dialect().is_tz_aware() => {
                fmt!(f, "CONVERT_TIMEZONE(");
                f.bind(&stmt::Value::from(tz))?;
                fmt!(f, ", TO_TIMESTAMP(" self.expr "))");
            }
            _ => fmt!(f, self.expr),
        }
        Ok(())
    }
}

pub(super) fn extract(expr: &stmt::ExprExtract, f: &mut Formatter<'_>) -> Result<()> {
    let value = InTz {
        expr: &expr.expr,
        tz: expr.tz.as_deref(),
    };

    match expr.part {
        // Sunday = 1 through Saturday = 7
        DatePart::WeekDay => fmt!(f, "EXTRACT('dow', " value ") + 1"),
        DatePart::IsoWeekDay => fmt!(f, "EXTRACT('dow_iso', " value ")"),
        DatePart::IsoYear => fmt!(f, "EXTRACT('yearofweekiso', " value ")"),
        part => {
            fmt!(f, "EXTRACT(");
            f.bind(&stmt::Value::from(part.lookup_name()))?;
            fmt!(f, ", " value ")");
        }
    }

    Ok(())
}

pub(super) fn trunc(expr: &stmt::ExprTrunc, f: &mut Formatter<'_>) -> Result<()> {
    let value = InTz {
        expr: &expr.expr,
        tz: expr.tz.as_deref(),
    };

    fmt!(f, "DATE_TRUNC(");
    f.bind(&stmt::Value::from(expr.kind.lookup_name()))?;
    fmt!(f, ", " value ")");

    if expr.output == TemporalKind::Time {
        fmt!(f, "::time");
    }

    Ok(())
}

pub(super) fn date_cast(expr: &stmt::ExprDateCast, f: &mut Formatter<'_>) -> Result<()> {
    let ty = match expr.output {
        TemporalKind::Date => "date",
        TemporalKind::Time => "time",
        TemporalKind::DateTime => {
            return Err(Error::invalid_statement(
                "a timestamp can only be cast to its date or its time",
            ))
        }
    };

    let value = InTz {
        expr: &expr.expr,
        tz: expr.tz.as_deref(),
    };

    fmt!(f, "(" value ")::" ty);
    Ok(())
}

/// Difference in microseconds. The right-hand side of a time difference is
/// passed through `TO_TIME` so string operands are accepted.
pub(super) fn temporal_sub(expr: &stmt::ExprTemporalSub, f: &mut Formatter<'_>) -> Result<()> {
    fmt!(f, "TIMEDIFF(MICROSECOND, ");

    if expr.kind == TemporalKind::Time {
        fmt!(f, "TO_TIME(" expr.rhs ")");
    } else {
        fmt!(f, expr.rhs);
    }

    fmt!(f, ", " expr.lhs ")");
    Ok(())
}
