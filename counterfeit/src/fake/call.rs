use crate::StdResult;
use crate::entities::Value;

/// A call intercepted by a fake.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeCall {
    method: String,
    arguments: Vec<Value>,
}

impl FakeCall {
    /// FakeCall factory
    pub fn new<S: Into<String>>(method: S, arguments: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Name of the called method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Arguments of the call, in order.
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Argument at the given position.
    pub fn argument(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }
}

/// Something that can answer a [FakeCall], ie a real instance a fake wraps.
#[cfg_attr(test, mockall::automock)]
pub trait CallTarget: Send + Sync {
    /// Answer the call with its return value, `None` for calls returning nothing.
    fn invoke(&self, call: &FakeCall) -> StdResult<Option<Value>>;
}

impl<F> CallTarget for F
where
    F: Fn(&FakeCall) -> StdResult<Option<Value>> + Send + Sync,
{
    fn invoke(&self, call: &FakeCall) -> StdResult<Option<Value>> {
        self(call)
    }
}
