mod field;
pub use field::{Field, FieldKind};

mod table;
pub use table::Table;
