pub mod catalog;
pub use catalog::Catalog;

pub use model_parser_core::{
    bail, descriptor, err, schema, Error, ModelDescriptor, ModelParser, Options, Registry,
    Result,
};
