//! Creation of dummies and fakes.
//!
//! A top level request opens a [DummyCreationSession] shared by every nested resolution it
//! triggers. Dummies are resolved by the [DummyValueResolver], fakes are built by the
//! [FakeObjectCreator] through a [ProxyFactory]. The [FakeAndDummyManager] is the facade over
//! all of them.

mod builder;
mod dummy_factory;
mod error;
mod fake_creator;
mod fake_options;
mod manager;
mod proxy_factory;
mod proxy_options;
mod resolver;
mod session;

pub use builder::FakeAndDummyManagerBuilder;
pub use dummy_factory::{DummyFactory, DummyFactoryRegistry, InMemoryDummyFactoryRegistry};
pub use error::{
    ConstructorAttempt, ConstructorAttemptFailure, ConstructorAttempts, FakeCreationError,
};
pub use fake_creator::FakeObjectCreator;
pub use fake_options::{DynamicOptionsBuilder, FakeOptions, FakeOptionsBuilder};
pub use manager::{DefaultFakeAndDummyManager, FakeAndDummyManager};
pub use proxy_factory::{CatalogProxyFactory, ProxyFactory, ProxyGenerationFailure};
pub use proxy_options::{AttributeSpec, ProxyConfigurationAction, ProxyOptions};
pub use resolver::{DefaultDummyValueResolver, DummyValueResolver, ResolutionStrategy};
pub use session::{DummyCreationSession, ResolutionOutcome};

#[cfg(test)]
pub use dummy_factory::MockDummyFactoryRegistry;
