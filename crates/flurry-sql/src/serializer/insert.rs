use super::{value::prepare, Comma, Compiled, Formatter, Ident, Serializer, ToSql};

use flurry_core::{
    driver::Capability,
    schema::Field,
    stmt::{self, InsertValue, OnConflict},
    Error, Result,
};

/// A column of the emitted statement.
struct Column<'a> {
    name: &'a str,

    /// Values are JSON text that must go through `parse_json`.
    json: bool,
}

/// A rendered value in a `VALUES` tuple.
#[derive(Clone)]
enum Cell<'a> {
    Bind(stmt::Value),
    Expr(&'a stmt::Expr),
    Default,
}

/// Compiles an insert.
///
/// Columns for which every row asks for the database default are left out,
/// unless that would leave no column at all. When the `DEFAULT` keyword is
/// not allowed in a multi-row `VALUES` list, remaining default requests are
/// replaced with the column's default expression. Semi-structured columns are
/// bound as text and parsed by a `SELECT ... FROM VALUES` shim, since a
/// `VALUES` list cannot wrap individual cells.
pub(super) fn compile(serializer: &Serializer<'_>, insert: &stmt::Insert) -> Result<Vec<Compiled>> {
    let capability = serializer.dialect().capability();

    if insert.rows.is_empty() {
        return Err(Error::invalid_statement("no rows to insert"));
    }

    for (i, row) in insert.rows.iter().enumerate() {
        if row.len() != insert.fields.len() {
            return Err(Error::invalid_statement(format!(
                "row {i} has {} values, expected {}",
                row.len(),
                insert.fields.len()
            )));
        }
    }

    let (columns, rows) = if insert.fields.is_empty() {
        // Only the primary key is generated; an INSERT needs at least one
        // column, so ask for its default explicitly.
        let Some(pk) = insert.primary_key.as_deref() else {
            return Err(Error::invalid_statement(
                "an insert without fields must name the primary key column",
            ));
        };

        let columns = vec![Column {
            name: pk,
            json: false,
        }];
        let rows = vec![vec![Cell::Default]; insert.rows.len()];
        (columns, rows)
    } else {
        value_columns(insert, capability)?
    };

    let shim = columns.iter().any(|column| column.json);
    let returning = !insert.returning.is_empty();

    if returning && capability.can_return_columns_from_insert {
        if capability.can_return_rows_from_bulk_insert {
            return Ok(vec![statement(serializer, insert, &columns, shim, &rows, true)?]);
        }

        // Each statement returns the columns of its single row.
        return rows.chunks(1).map(|row| statement(serializer, insert, &columns, shim, row, true)).collect();
    }

    if !returning && capability.has_bulk_insert {
        Ok(vec![statement(serializer, insert, &columns, shim, &rows, false)?])
    } else {
        rows.chunks(1).map(|row| statement(serializer, insert, &columns, shim, row, false)).collect()
    }
}

/// Renders one statement inserting `rows`.
fn statement(
    serializer: &Serializer<'_>,
    insert: &stmt::Insert,
    columns: &[Column<'_>],
    shim: bool,
    rows: &[Vec<Cell<'_>>],
    returning: bool,
) -> Result<Compiled> {
    let mut params = Vec::<stmt::Value>::new();

    let sql = serializer.render(&mut params, |f| {
        let names = columns.iter().map(|column| Ident(column.name));
        fmt!(f, "INSERT INTO " Ident(&insert.table) " (" Comma(names) ")");

        if shim {
            let select = columns
                .iter()
                .enumerate()
                .map(|(i, column)| ShimColumn(i + 1, column.json));
            fmt!(f, " SELECT " Comma(select) " FROM");
        }

        fmt!(f, " VALUES " Comma(rows.iter().map(|row| Row(row))));

        on_conflict_suffix(&insert.on_conflict, f)?;

        if returning {
            fmt!(f, " RETURNING " Comma(insert.returning.iter().map(Ident)));
        }

        Ok(())
    })?;

    Ok(Compiled { sql, params })
}

/// Builds the emitted columns and the rows of cells from the insert's
/// fields.
fn value_columns<'a>(
    insert: &'a stmt::Insert,
    capability: &Capability,
) -> Result<(Vec<Column<'a>>, Vec<Vec<Cell<'a>>>)> {
    let mut columns = vec![];
    let mut cols: Vec<Vec<Cell<'a>>> = vec![];
    let mut remaining = insert.fields.len();

    for (index, field) in insert.fields.iter().enumerate() {
        let values = insert.rows.iter().map(|row| &row[index]);

        if field.has_db_default() && remaining > 1 && values.clone().all(InsertValue::is_default) {
            tracing::trace!(field = %field.name, "every row uses the default; dropping column");
            remaining -= 1;
            continue;
        }

        let cells = values
            .map(|value| cell(field, value, capability))
            .collect::<Result<Vec<_>>>()?;

        columns.push(Column {
            name: &field.name,
            json: field.is_json(),
        });
        cols.push(cells);
    }

    // Transpose into rows
    let rows = (0..insert.rows.len())
        .map(|row| cols.iter().map(|col| col[row].clone()).collect())
        .collect();

    Ok((columns, rows))
}

fn cell<'a>(field: &'a Field, value: &'a InsertValue, capability: &Capability) -> Result<Cell<'a>> {
    Ok(match value {
        InsertValue::Value(value) => Cell::Bind(prepare(value)?),
        InsertValue::Expr(expr) => Cell::Expr(expr),
        InsertValue::Default if capability.supports_default_keyword_in_bulk_insert => Cell::Default,
        InsertValue::Default => match &field.db_default {
            Some(stmt::Expr::Value(value)) => Cell::Bind(prepare(value)?),
            Some(expr) => Cell::Expr(expr),
            None => {
                return Err(Error::invalid_statement(format!(
                    "field `{}` asks for a default but has no default expression",
                    field.name
                )))
            }
        },
    })
}

fn on_conflict_suffix(on_conflict: &OnConflict, f: &mut Formatter<'_>) -> Result<()> {
    let capability = f.dialect().capability();

    match on_conflict {
        OnConflict::None => {}
        OnConflict::Ignore => {
            if !capability.supports_ignore_conflicts {
                return Err(Error::unsupported_feature("ignoring conflicts on insert"));
            }

            fmt!(f, " ON CONFLICT DO NOTHING");
        }
        OnConflict::Update {
            update_fields,
            unique_fields,
        } => {
            if !capability.supports_update_conflicts {
                return Err(Error::unsupported_feature("updating conflicts on insert"));
            }

            if update_fields.is_empty() {
                return Err(Error::invalid_statement("update on conflict without fields to update"));
            }

            let assignments = update_fields.iter().map(|name| Excluded(name));
            fmt!(f, " ON CONFLICT(" Comma(unique_fields.iter().map(Ident)) ") DO UPDATE SET " Comma(assignments));
        }
    }

    Ok(())
}

/// `(cell, ...)`
struct Row<'a>(&'a [Cell<'a>]);

impl ToSql for Row<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, "(" Comma(self.0) ")");
        Ok(())
    }
}

impl ToSql for &Cell<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Cell::Bind(value) => f.bind(value)?,
            Cell::Expr(expr) => fmt!(f, *expr),
            Cell::Default => fmt!(f, "DEFAULT"),
        }
        Ok(())
    }
}

/// `$n` or `parse_json($n)` in the `SELECT` shim.
struct ShimColumn(usize, bool);

impl ToSql for ShimColumn {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.1 {
            fmt!(f, "parse_json($" self.0 ")");
        } else {
            fmt!(f, "$" self.0);
        }
        Ok(())
    }
}

/// `"COL" = EXCLUDED."COL"`
struct Excluded<'a>(&'a str);

impl ToSql for Excluded<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, Ident(self.0) " = EXCLUDED." Ident(self.0));
        Ok(())
    }
}
