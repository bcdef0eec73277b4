#![warn(missing_docs)]

//! Fake and dummy object creation engine for unit tests.
//!
//! Provide:
//! - A [type catalog][entities::TypeCatalog] describing the types a test suite can ask for,
//!   their constructors and the interfaces they implement.
//! - A [dummy value resolver][creation::DummyValueResolver] that recursively builds inert
//!   placeholder values, guarded against cycles by a per-request
//!   [session][creation::DummyCreationSession].
//! - A [fake creator][creation::FakeObjectCreator] producing call-intercepting
//!   [fakes][fake::FakeObject] through a pluggable [proxy factory][creation::ProxyFactory].
//! - The [facade][creation::FakeAndDummyManager] tying them together.
//! - [Argument constraints][constraints] used to match expected call arguments.

pub mod configuration;
pub mod constraints;
pub mod creation;
pub mod entities;
pub mod fake;
pub mod logging;

#[cfg(test)]
pub(crate) mod test;

pub use configuration::{Configuration, DefaultConfiguration, DummyFallbackPolicy};
pub use creation::{
    DefaultFakeAndDummyManager, FakeAndDummyManager, FakeAndDummyManagerBuilder,
    FakeCreationError, FakeOptions,
};
pub use entities::{TypeCatalog, TypeDescriptor, TypeKey, TypeKind, Value};
pub use fake::FakeObject;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T, StdError>;
