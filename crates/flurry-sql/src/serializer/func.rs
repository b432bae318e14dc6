use super::{dialect::FuncRender, Comma, Formatter, ToSql};

use flurry_core::{stmt, Error, Result};

pub(super) fn to_sql(expr: &stmt::ExprFunc, f: &mut Formatter<'_>) -> Result<()> {
    let Some(render) = f.dialect().func(expr.kind) else {
        return Err(Error::unsupported_feature(format!(
            "function {}",
            expr.kind.name()
        )));
    };

    match render {
        FuncRender::Call(name) => {
            fmt!(f, name "(" Comma(&expr.args) ")");
            Ok(())
        }
        FuncRender::Custom(render) => render(f, &expr.args),
    }
}

fn arity<'a, const N: usize>(name: &str, args: &'a [stmt::Expr]) -> Result<&'a [stmt::Expr; N]> {
    args.try_into().map_err(|_| {
        Error::invalid_statement(format!(
            "{name} takes {N} argument(s), {} given",
            args.len()
        ))
    })
}

/// Null operands become empty strings instead of making the result null.
pub(super) fn concat(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    if args.is_empty() {
        return Err(Error::invalid_statement("CONCAT needs at least one argument"));
    }

    fmt!(f, "CONCAT(");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            fmt!(f, ", ");
        }
        fmt!(f, "COALESCE(" arg ", '')");
    }
    fmt!(f, ")");
    Ok(())
}

/// `POSITION` takes the needle first.
pub(super) fn str_index(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    let [haystack, needle] = arity::<2>("StrIndex", args)?;
    fmt!(f, "POSITION(" needle ", " haystack ")");
    Ok(())
}

pub(super) fn random(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    let [] = arity::<0>("Random", args)?;
    fmt!(f, "UNIFORM(0, 0.99999999999999999, RANDOM())");
    Ok(())
}

fn sha2(f: &mut Formatter<'_>, args: &[stmt::Expr], bits: usize) -> Result<()> {
    let [arg] = arity::<1>("SHA2", args)?;
    fmt!(f, "SHA2(" arg ", " bits ")");
    Ok(())
}

pub(super) fn sha224(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    sha2(f, args, 224)
}

pub(super) fn sha256(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    sha2(f, args, 256)
}

pub(super) fn sha384(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    sha2(f, args, 384)
}

pub(super) fn sha512(f: &mut Formatter<'_>, args: &[stmt::Expr]) -> Result<()> {
    sha2(f, args, 512)
}
