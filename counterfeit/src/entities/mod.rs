//! The types describing what the engine can create.

mod catalog;
mod type_descriptor;
mod type_key;
mod value;

pub use catalog::TypeCatalog;
pub use type_descriptor::{
    Attribute, ConstructorArguments, ConstructorFn, ConstructorInfo, TypeDescriptor, TypeKind,
};
pub use type_key::TypeKey;
pub use value::{AnyValue, Value};
