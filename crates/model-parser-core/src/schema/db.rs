//! Storage-level schema, as reported by a catalog.

mod column;
pub use column::Column;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
