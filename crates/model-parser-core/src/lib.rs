pub mod catalog;
pub use catalog::Catalog;

pub mod descriptor;
pub use descriptor::ModelDescriptor;

mod error;
pub use error::Error;

mod parser;
pub use parser::{ModelParser, Options};

pub mod schema;
pub use schema::Registry;

/// A Result type alias that uses the model parser's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
