use super::{dialect::ConnectorRender, Formatter, Raw, ToSql};

use flurry_core::{stmt, Error, Result};

pub(super) fn to_sql(expr: &stmt::ExprCombine, f: &mut Formatter<'_>) -> Result<()> {
    let Some(render) = f.dialect().connector(expr.connector) else {
        return Err(Error::unsupported_feature(format!(
            "connector `{}`",
            expr.connector
        )));
    };

    match render {
        ConnectorRender::Infix(op) => {
            fmt!(f, "(" Operand(&expr.lhs) " " Raw(op) " " Operand(&expr.rhs) ")");
        }
        ConnectorRender::Func(name) => {
            fmt!(f, name "(" Operand(&expr.lhs) ", " Operand(&expr.rhs) ")");
        }
    }

    Ok(())
}

/// An operand of a combined expression. Duration values take part in
/// arithmetic as interval literals.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self.0 {
            stmt::Expr::Value(value @ stmt::Value::Duration(delta)) => {
                let Some(micros) = value.duration_micros() else {
                    return Err(Error::invalid_statement(format!(
                        "duration {delta} does not fit in microseconds"
                    )));
                };

                fmt!(f, "INTERVAL '" micros " MICROSECONDS'");
            }
            expr => fmt!(f, expr),
        }

        Ok(())
    }
}
