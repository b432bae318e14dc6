use super::{Formatter, ToSql};

use flurry_core::{
    stmt::{self, AggregateKind},
    Error, Result,
};

pub(super) fn to_sql(expr: &stmt::ExprAggregate, f: &mut Formatter<'_>) -> Result<()> {
    let Some(name) = f.dialect().aggregate(expr.kind) else {
        return Err(Error::unsupported_feature(format!(
            "aggregate {}",
            expr.kind.name()
        )));
    };

    let distinct = if expr.distinct { "DISTINCT " } else { "" };

    fmt!(f, name "(" distinct);

    match (&expr.args[..], &expr.filter) {
        ([], None) if expr.kind == AggregateKind::Count && !expr.distinct => fmt!(f, "*"),
        // The warehouse has no FILTER clause; rows failing the filter
        // contribute NULL, which aggregates ignore.
        ([], Some(filter)) if expr.kind == AggregateKind::Count && !expr.distinct => {
            fmt!(f, "CASE WHEN " filter " THEN 1 END")
        }
        ([], _) => {
            return Err(Error::invalid_statement(format!(
                "aggregate {} needs an argument",
                expr.kind.name()
            )))
        }
        ([first, rest @ ..], filter) => {
            match filter {
                Some(filter) => fmt!(f, "CASE WHEN " filter " THEN " first " END"),
                None => fmt!(f, first),
            }

            for arg in rest {
                fmt!(f, ", " arg);
            }
        }
    }

    fmt!(f, ")");
    Ok(())
}
