use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::StdResult;
use crate::entities::{Attribute, TypeKey, Value};
use crate::fake::{FakeCall, FakeManager};

/// A generated proxy: every call made on it is intercepted by its [FakeManager].
///
/// Two fakes are equal only if they are the same fake.
#[derive(Clone)]
pub struct FakeObject {
    manager: Arc<FakeManager>,
    implemented_interfaces: Vec<TypeKey>,
    attributes: Vec<Attribute>,
    base_instance: Option<Value>,
}

impl FakeObject {
    /// FakeObject factory
    pub fn new(
        manager: FakeManager,
        implemented_interfaces: Vec<TypeKey>,
        attributes: Vec<Attribute>,
        base_instance: Option<Value>,
    ) -> Self {
        Self {
            manager: Arc::new(manager),
            implemented_interfaces,
            attributes,
            base_instance,
        }
    }

    /// Manager intercepting the calls of this fake.
    pub fn fake_manager(&self) -> Arc<FakeManager> {
        self.manager.clone()
    }

    /// Type the fake was created for.
    pub fn faked_type(&self) -> &TypeKey {
        self.manager.faked_type()
    }

    /// Interfaces implemented by the fake on top of its faked type.
    pub fn implemented_interfaces(&self) -> &[TypeKey] {
        &self.implemented_interfaces
    }

    /// Check if the fake can be used where the given type is expected.
    pub fn implements(&self, type_key: &TypeKey) -> bool {
        self.faked_type() == type_key || self.implemented_interfaces.contains(type_key)
    }

    /// Attributes stamped on the fake.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value built by the constructor of the faked type, if it has one.
    pub fn base_instance(&self) -> Option<&Value> {
        self.base_instance.as_ref()
    }

    /// Call a method of the fake.
    pub fn call<S: Into<String>>(
        &self,
        method: S,
        arguments: Vec<Value>,
    ) -> StdResult<Option<Value>> {
        self.manager.intercept(&FakeCall::new(method, arguments))
    }
}

impl PartialEq for FakeObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.manager, &other.manager)
    }
}

impl Debug for FakeObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Faked {}", self.faked_type())
    }
}

/// Manager of the given value if it is a fake.
pub fn try_get_fake_manager(value: &Value) -> Option<Arc<FakeManager>> {
    value.as_fake().map(FakeObject::fake_manager)
}
