pub mod serializer;
pub use serializer::{
    parse_json_path, quote_name, render_json_path, Compiled, Dialect,
    ExplainFormat, Params, Placeholder, Serializer,
};
