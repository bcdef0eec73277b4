use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use crate::StdResult;
use crate::entities::{TypeKey, Value};

/// User provided way to build the dummy of a type.
pub trait DummyFactory: Send + Sync {
    /// Build a dummy.
    fn create(&self) -> StdResult<Value>;
}

impl<F> DummyFactory for F
where
    F: Fn() -> StdResult<Value> + Send + Sync,
{
    fn create(&self) -> StdResult<Value> {
        self()
    }
}

/// Registry of the [DummyFactory] of each type.
#[cfg_attr(test, mockall::automock)]
pub trait DummyFactoryRegistry: Send + Sync {
    /// Factory registered for exactly the given type.
    fn lookup(&self, type_key: &TypeKey) -> Option<Arc<dyn DummyFactory>>;
}

/// In memory [DummyFactoryRegistry].
///
/// Registration is expected to happen during test setup, before any creation request.
#[derive(Default)]
pub struct InMemoryDummyFactoryRegistry {
    factories: RwLock<HashMap<TypeKey, Arc<dyn DummyFactory>>>,
}

impl InMemoryDummyFactoryRegistry {
    /// InMemoryDummyFactoryRegistry factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory of the given type, replacing any previous one.
    pub fn register_for(&self, type_key: TypeKey, factory: Arc<dyn DummyFactory>) {
        self.factories.write().unwrap().insert(type_key, factory);
    }

    /// Register a factory building values of type `T`.
    pub fn register<T, F>(&self, factory: F)
    where
        T: Any + Debug + PartialEq + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_for(
            TypeKey::of::<T>(),
            Arc::new(move || -> StdResult<Value> { Ok(Value::new(factory())) }),
        );
    }
}

impl DummyFactoryRegistry for InMemoryDummyFactoryRegistry {
    fn lookup(&self, type_key: &TypeKey) -> Option<Arc<dyn DummyFactory>> {
        self.factories.read().unwrap().get(type_key).cloned()
    }
}
