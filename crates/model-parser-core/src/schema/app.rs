//! Model-level schema: the declarative stand-in for reflecting over a live
//! model class.

mod attribute;
pub use attribute::{Attribute, Getter};

mod method;
pub use method::{Method, MethodBody};

mod model;
pub use model::Model;

pub mod relation;
pub use relation::{RelationDef, RelationKind, Relationship};

mod return_ty;
pub use return_ty::ReturnType;

mod ty;
pub use ty::{EnumCase, EnumType, EnumValue, TypeDef};
