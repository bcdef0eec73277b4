use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::logging::short_type_name;

/// Identifies a type that can be requested from the engine.
///
/// Keys are built from [std::any::type_name], which is also the name a [Value][crate::Value]
/// reports at runtime: this is what allows the engine to check that a value can be used where a
/// key is expected. Traits are keyed by their trait object, ie `TypeKey::of::<dyn Clock>()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeKey(String);

impl TypeKey {
    /// Key of the given rust type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    /// Key from a raw type name.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Full name of the type.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Name of the type with every module path stripped, ie `Vec<Calendar>`.
    pub fn short_name(&self) -> String {
        short_type_name(&self.0)
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
