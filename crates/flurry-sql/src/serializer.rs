#[macro_use]
mod fmt;
use fmt::{Literal, Percent, Raw, ToSql};

mod delim;
use delim::{Comma, Delimited, Period};

mod dialect;
pub use dialect::Dialect;

mod ident;
use ident::Ident;
pub use ident::quote_name;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod aggregate;
mod combine;
mod datetime;
mod expr;
mod func;
mod insert;
mod json;
pub use json::{parse_json_path, render_json_path};
mod lookup;
mod statement;
mod ty;
mod value;

use flurry_core::{
    driver::Transaction,
    stmt::{self, Statement},
    Error, Result,
};

/// A compiled statement: SQL text and the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub sql: String,
    pub params: Vec<stmt::Value>,
}

/// Output format of `EXPLAIN`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExplainFormat {
    #[default]
    Tabular,
    Json,
    Text,
}

/// Serialize statements to SQL strings
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// Rendering rules and supported features
    dialect: &'a Dialect,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut (dyn Params + 'a),
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: &'a Dialect) -> Serializer<'a> {
        Serializer { dialect }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    /// Serialize a statement. Inserts may compile to more than one statement.
    pub fn serialize(&self, stmt: &Statement) -> Result<Vec<Compiled>> {
        match stmt {
            Statement::Query(query) => {
                let mut params = Vec::<stmt::Value>::new();
                let sql = self.serialize_query(query, &mut params)?;
                Ok(vec![Compiled { sql, params }])
            }
            Statement::Insert(insert) => self.serialize_insert(insert),
        }
    }

    /// Serialize a query.
    pub fn serialize_query(&self, query: &stmt::Query, params: &mut impl Params) -> Result<String> {
        self.render(params, |f| query.to_sql(f))
    }

    /// Serialize an expression fragment, e.g. for use in a `WHERE` clause
    /// assembled elsewhere.
    pub fn serialize_expr(&self, expr: &stmt::Expr, params: &mut impl Params) -> Result<String> {
        self.render(params, |f| expr.to_sql(f))
    }

    /// Compile an insert to one or more statements.
    pub fn serialize_insert(&self, insert: &stmt::Insert) -> Result<Vec<Compiled>> {
        insert::compile(self, insert).map_err(|err| {
            err.context(Error::from_args(format_args!(
                "compiling insert into {}",
                quote_name(&insert.table)
            )))
        })
    }

    /// `EXPLAIN USING <format>` followed by the query.
    pub fn serialize_explain(
        &self,
        query: &stmt::Query,
        format: ExplainFormat,
        params: &mut impl Params,
    ) -> Result<String> {
        let format = match format {
            ExplainFormat::Tabular => "TABULAR",
            ExplainFormat::Json => "JSON",
            ExplainFormat::Text => "TEXT",
        };

        self.render(params, |f| {
            fmt!(f, "EXPLAIN USING " format " " query);
            Ok(())
        })
    }

    /// Serialize a transaction control operation.
    ///
    /// The warehouse has a single level of transactions, so savepoints are
    /// rejected unless the capability says otherwise.
    pub fn serialize_transaction(&self, op: &Transaction) -> Result<String> {
        if op.is_savepoint() && !self.dialect.capability().supports_savepoints {
            return Err(Error::unsupported_feature("savepoints"));
        }

        Ok(match op {
            Transaction::Begin => "BEGIN".to_string(),
            Transaction::Commit => "COMMIT".to_string(),
            Transaction::Rollback => "ROLLBACK".to_string(),
            Transaction::Savepoint(id) => format!("SAVEPOINT sp_{id}"),
            Transaction::ReleaseSavepoint(id) => format!("RELEASE SAVEPOINT sp_{id}"),
            Transaction::RollbackToSavepoint(id) => format!("ROLLBACK TO SAVEPOINT sp_{id}"),
        })
    }

    /// Statements that empty the given tables. `TRUNCATE` also restarts
    /// identity sequences, so it is used only when they should be reset.
    pub fn serialize_flush(&self, tables: &[&str], reset_sequences: bool) -> Result<Vec<String>> {
        tables
            .iter()
            .map(|table| {
                self.render(&mut Vec::<stmt::Value>::new(), |f| {
                    if reset_sequences {
                        fmt!(f, "TRUNCATE " Ident(table) ";");
                    } else {
                        fmt!(f, "DELETE FROM " Ident(table) ";");
                    }
                    Ok(())
                })
            })
            .collect()
    }

    /// Query for the most recently generated primary key of a table.
    ///
    /// The warehouse has no `LAST_INSERT_ID()`, so this reads the largest key
    /// and is subject to races with concurrent inserts.
    pub fn serialize_last_insert_id(&self, table: &str, primary_key: &str) -> Result<String> {
        self.render(&mut Vec::<stmt::Value>::new(), |f| {
            fmt!(f, "SELECT MAX(" Ident(primary_key) ") FROM " Ident(table));
            Ok(())
        })
    }

    /// Probe for a database. The warehouse reports a missing database as an
    /// error whose message says it "does not exist".
    pub fn serialize_describe_database(&self, name: &str) -> Result<String> {
        self.render(&mut Vec::<stmt::Value>::new(), |f| {
            fmt!(f, "DESCRIBE DATABASE " Ident(name));
            Ok(())
        })
    }

    fn render(
        &self,
        params: &mut dyn Params,
        body: impl FnOnce(&mut Formatter<'_>) -> Result<()>,
    ) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        body(&mut fmt)?;

        tracing::trace!(sql = %ret, "serialized statement");
        Ok(ret)
    }
}

impl Formatter<'_> {
    fn dialect(&self) -> &Dialect {
        self.serializer.dialect
    }

    fn escapes_percent(&self) -> bool {
        self.dialect().capability().escapes_percent()
    }

    /// Append text, doubling `%` when the client interpolates parameters.
    fn push_escaped(&mut self, text: &str) {
        if self.escapes_percent() {
            self.dst.push_str(&text.replace('%', "%%"));
        } else {
            self.dst.push_str(text);
        }
    }

    /// Bind a value and write its placeholder.
    fn bind(&mut self, value: &stmt::Value) -> Result<()> {
        let placeholder = self.params.push(value);
        placeholder.to_sql(self)
    }
}
