//! Runtime of the fakes produced by the engine: intercepted calls and the rule chain answering
//! them.

mod call;
mod fake_manager;
mod fake_object;
mod rule;

pub use call::{CallTarget, FakeCall};
pub use fake_manager::FakeManager;
pub use fake_object::{FakeObject, try_get_fake_manager};
pub use rule::{FakeObjectCallRule, WrappedObjectRule};

#[cfg(test)]
pub use call::MockCallTarget;
#[cfg(test)]
pub use rule::MockFakeObjectCallRule;
