use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::entities::{TypeDescriptor, TypeKey, Value};

type DefaultValueFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Registry of the types known by the engine.
///
/// Built during test setup, then shared read only between the engine components.
pub struct TypeCatalog {
    descriptors: HashMap<TypeKey, Arc<TypeDescriptor>>,
    default_values: HashMap<TypeKey, DefaultValueFn>,
}

macro_rules! register_defaults {
    ($catalog:expr, $($ty:ty),+ $(,)?) => {
        $( $catalog.register_default::<$ty>(); )+
    };
}

impl TypeCatalog {
    /// Catalog knowing the default value of the primitive types, `String` and `()`.
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        register_defaults!(
            catalog, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
            f32, f64, String, (),
        );
        catalog
    }

    /// Catalog knowing nothing, not even the primitive types.
    pub fn empty() -> Self {
        Self {
            descriptors: HashMap::new(),
            default_values: HashMap::new(),
        }
    }

    /// Register a type descriptor, replacing any previous one with the same key.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.descriptors
            .insert(descriptor.key().clone(), Arc::new(descriptor));
        self
    }

    /// Register `T` as built from its [Default] value.
    ///
    /// Used for value types and collections, ie `Vec<String>` or `HashMap<u32, String>`.
    pub fn register_default<T>(&mut self) -> &mut Self
    where
        T: Default + Any + Debug + PartialEq + Send + Sync,
    {
        self.default_values
            .insert(TypeKey::of::<T>(), Arc::new(|| Value::new(T::default())));
        self
    }

    /// Descriptor of the given type.
    pub fn descriptor(&self, type_key: &TypeKey) -> Option<Arc<TypeDescriptor>> {
        self.descriptors.get(type_key).cloned()
    }

    /// Check if the type is either described or has a registered default value.
    pub fn knows(&self, type_key: &TypeKey) -> bool {
        self.descriptors.contains_key(type_key) || self.default_values.contains_key(type_key)
    }

    /// A fresh default value of the given type if one is registered.
    pub fn default_value(&self, type_key: &TypeKey) -> Option<Value> {
        self.default_values.get(type_key).map(|build| build())
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
