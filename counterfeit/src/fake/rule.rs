use std::sync::Arc;

use crate::StdResult;
use crate::entities::Value;
use crate::fake::{CallTarget, FakeCall};

/// A rule of the chain of a [FakeManager][crate::fake::FakeManager].
#[cfg_attr(test, mockall::automock)]
pub trait FakeObjectCallRule: Send + Sync {
    /// Check if the rule answers the given call.
    fn is_applicable_to(&self, call: &FakeCall) -> bool;

    /// Answer the call.
    fn apply(&self, call: &FakeCall) -> StdResult<Option<Value>>;
}

/// Rule forwarding every call to a wrapped instance.
///
/// The wrapped instance answer, or its error, is returned verbatim.
pub struct WrappedObjectRule {
    wrapped: Arc<dyn CallTarget>,
}

impl WrappedObjectRule {
    /// WrappedObjectRule factory
    pub fn new(wrapped: Arc<dyn CallTarget>) -> Self {
        Self { wrapped }
    }
}

impl FakeObjectCallRule for WrappedObjectRule {
    fn is_applicable_to(&self, _call: &FakeCall) -> bool {
        true
    }

    fn apply(&self, call: &FakeCall) -> StdResult<Option<Value>> {
        self.wrapped.invoke(call)
    }
}
