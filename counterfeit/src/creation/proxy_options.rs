use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::entities::{Attribute, TypeKey, Value};
use crate::fake::{CallTarget, FakeObject};

/// Action run on a fake right after its creation.
pub type ProxyConfigurationAction = Box<dyn FnOnce(&FakeObject) + Send>;

/// Build an [Attribute] to stamp on a proxy, evaluated by the proxy factory.
#[derive(Clone)]
pub struct AttributeSpec(Arc<dyn Fn() -> Attribute + Send + Sync>);

impl AttributeSpec {
    /// AttributeSpec factory
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Attribute + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Build the attribute.
    pub fn build(&self) -> Attribute {
        (self.0)()
    }
}

impl Debug for AttributeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "AttributeSpec({})", self.build())
    }
}

/// Customizations of a fake collected before its proxy is generated.
///
/// Owned by one fake creation, the proxy factory only ever sees a shared reference on it.
#[derive(Default)]
pub struct ProxyOptions {
    arguments_for_constructor: Option<Vec<Value>>,
    additional_interfaces: Vec<TypeKey>,
    attributes: Vec<AttributeSpec>,
    configuration_actions: Vec<ProxyConfigurationAction>,
    wrapped_instance: Option<Arc<dyn CallTarget>>,
}

impl ProxyOptions {
    /// ProxyOptions factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments to pass to the constructor, `None` to let the creator choose them.
    pub fn arguments_for_constructor(&self) -> Option<&[Value]> {
        self.arguments_for_constructor.as_deref()
    }

    /// Set the arguments to pass to the constructor, replacing previous ones.
    pub fn set_arguments_for_constructor(&mut self, arguments: Vec<Value>) {
        self.arguments_for_constructor = Some(arguments);
    }

    /// Interfaces the proxy must implement on top of its faked type.
    pub fn additional_interfaces(&self) -> &[TypeKey] {
        &self.additional_interfaces
    }

    /// Add an interface the proxy must implement.
    pub fn add_interface_to_implement(&mut self, interface: TypeKey) {
        self.additional_interfaces.push(interface);
    }

    /// Attributes to stamp on the proxy.
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    /// Add an attribute to stamp on the proxy.
    pub fn add_attribute(&mut self, attribute: AttributeSpec) {
        self.attributes.push(attribute);
    }

    /// Number of registered configuration actions.
    pub fn configuration_actions_count(&self) -> usize {
        self.configuration_actions.len()
    }

    /// Add an action to run on the fake once created.
    pub fn add_proxy_configuration_action(&mut self, action: ProxyConfigurationAction) {
        self.configuration_actions.push(action);
    }

    /// Take the configuration actions, in registration order.
    pub fn take_configuration_actions(&mut self) -> Vec<ProxyConfigurationAction> {
        std::mem::take(&mut self.configuration_actions)
    }

    /// Instance the fake forwards its calls to.
    pub fn wrapped_instance(&self) -> Option<&Arc<dyn CallTarget>> {
        self.wrapped_instance.as_ref()
    }

    /// Set the instance the fake forwards its calls to.
    pub fn set_wrapped_instance(&mut self, wrapped: Arc<dyn CallTarget>) {
        self.wrapped_instance = Some(wrapped);
    }
}

impl Debug for ProxyOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyOptions")
            .field("arguments_for_constructor", &self.arguments_for_constructor)
            .field("additional_interfaces", &self.additional_interfaces)
            .field("attributes", &self.attributes)
            .field("configuration_actions", &self.configuration_actions.len())
            .field("is_wrapping", &self.wrapped_instance.is_some())
            .finish()
    }
}
