mod connector;
pub use connector::Connector;

mod expr;
pub use expr::Expr;

mod expr_aggregate;
pub use expr_aggregate::{AggregateKind, ExprAggregate};

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_collate;
pub use expr_collate::ExprCollate;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_combine;
pub use expr_combine::ExprCombine;

mod expr_date_cast;
pub use expr_date_cast::ExprDateCast;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_extract;
pub use expr_extract::ExprExtract;

mod expr_func;
pub use expr_func::{ExprFunc, FuncKind};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_in_subquery;
pub use expr_in_subquery::ExprInSubquery;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_json;
pub use expr_json::{ExprHasKey, ExprJsonKey, KeyConnector};

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_pattern;
pub use expr_pattern::{ExprPattern, Lookup};

mod expr_record;
pub use expr_record::ExprRecord;

mod expr_regex;
pub use expr_regex::ExprRegex;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod expr_temporal_sub;
pub use expr_temporal_sub::ExprTemporalSub;

mod expr_trunc;
pub use expr_trunc::ExprTrunc;

mod insert;
pub use insert::{Insert, InsertValue, OnConflict};

mod json_path;
pub use json_path::{JsonPath, PathSegment};

mod op_binary;
pub use op_binary::BinaryOp;

mod query;
pub use query::{Direction, Limit, Lock, OrderByExpr, Query};

mod statement;
pub use statement::Statement;

mod temporal;
pub use temporal::{DatePart, TemporalKind, TruncKind};

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
