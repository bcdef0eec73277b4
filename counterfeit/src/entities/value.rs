use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::entities::TypeKey;
use crate::fake::FakeObject;

/// Object safe view of a value handled by the engine.
///
/// Implemented for every `'static` type that is comparable and debuggable.
pub trait AnyValue: Any + Send + Sync {
    /// Upcast to [Any], to allow downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Value equality with another erased value, false if their types differ.
    fn value_eq(&self, other: &dyn AnyValue) -> bool;

    /// Runtime name of the type of the value.
    fn type_name(&self) -> &'static str;

    /// Write the debug representation of the value.
    fn write_debug(&self, writer: &mut dyn fmt::Write) -> fmt::Result;
}

impl<T> AnyValue for T
where
    T: Any + Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_eq(&self, other: &dyn AnyValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn write_debug(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        write!(writer, "{self:?}")
    }
}

/// A type erased, cheaply clonable, value created or consumed by the engine.
///
/// Two values are equal when they hold the same type and their contents are equal.
#[derive(Clone)]
pub struct Value(Arc<dyn AnyValue>);

impl Value {
    /// Wrap the given value.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Debug + PartialEq + Send + Sync,
    {
        Self(Arc::new(value))
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Check if the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Runtime name of the type of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// The wrapped value as a fake, if it is one.
    pub fn as_fake(&self) -> Option<&FakeObject> {
        self.downcast_ref::<FakeObject>()
    }

    /// Check if the value can be used where the given type is expected.
    ///
    /// A fake is assignable to every type it implements, any other value only to its own type.
    pub fn is_assignable_to(&self, type_key: &TypeKey) -> bool {
        match self.as_fake() {
            Some(fake) => fake.implements(type_key),
            None => self.type_name() == type_key.name(),
        }
    }

    /// Check if both values are the same instance.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Write the debug representation of the wrapped value, forwarding its errors.
    pub fn write_debug(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        self.0.write_debug(writer)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.value_eq(other.0.as_ref())
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.write_debug(f)
    }
}
