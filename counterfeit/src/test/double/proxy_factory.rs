use std::sync::Mutex;

use crate::creation::{ProxyFactory, ProxyGenerationFailure, ProxyOptions};
use crate::entities::{TypeKey, Value};
use crate::fake::FakeObject;

/// [ProxyFactory] recording the constructor arguments it receives before delegating.
pub struct RecordingProxyFactory {
    inner: Box<dyn ProxyFactory>,
    received_arguments: Mutex<Vec<Option<Vec<Value>>>>,
}

impl RecordingProxyFactory {
    pub fn new<P: ProxyFactory + 'static>(inner: P) -> Self {
        Self {
            inner: Box::new(inner),
            received_arguments: Mutex::new(vec![]),
        }
    }

    /// Constructor arguments of every call, in order.
    pub fn received_arguments(&self) -> Vec<Option<Vec<Value>>> {
        self.received_arguments.lock().unwrap().clone()
    }
}

impl ProxyFactory for RecordingProxyFactory {
    fn generate_proxy(
        &self,
        type_key: &TypeKey,
        options: &ProxyOptions,
        arguments_for_constructor: Option<&[Value]>,
    ) -> Result<FakeObject, ProxyGenerationFailure> {
        self.received_arguments
            .lock()
            .unwrap()
            .push(arguments_for_constructor.map(<[Value]>::to_vec));

        self.inner
            .generate_proxy(type_key, options, arguments_for_constructor)
    }
}
