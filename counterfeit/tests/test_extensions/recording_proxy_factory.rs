use std::sync::{Arc, Mutex};

use counterfeit::creation::{ProxyFactory, ProxyGenerationFailure, ProxyOptions};
use counterfeit::{FakeObject, TypeKey, Value};

/// Proxy factory keeping track of the constructor arguments it was asked to use.
pub struct RecordingProxyFactory {
    inner: Arc<dyn ProxyFactory>,
    requests: Mutex<Vec<(TypeKey, Option<Vec<Value>>)>>,
}

impl RecordingProxyFactory {
    pub fn new(inner: Arc<dyn ProxyFactory>) -> Self {
        Self {
            inner,
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<(TypeKey, Option<Vec<Value>>)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ProxyFactory for RecordingProxyFactory {
    fn generate_proxy(
        &self,
        type_key: &TypeKey,
        options: &ProxyOptions,
        arguments_for_constructor: Option<&[Value]>,
    ) -> Result<FakeObject, ProxyGenerationFailure> {
        self.requests
            .lock()
            .unwrap()
            .push((type_key.clone(), arguments_for_constructor.map(<[Value]>::to_vec)));

        self.inner
            .generate_proxy(type_key, options, arguments_for_constructor)
    }
}
