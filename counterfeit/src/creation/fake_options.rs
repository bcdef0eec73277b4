use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use slog::{Logger, debug};

use crate::creation::{AttributeSpec, ProxyOptions};
use crate::entities::{Attribute, TypeKey, Value};
use crate::fake::{CallTarget, FakeObject, WrappedObjectRule};
use crate::logging::LoggerExtensions;

/// Fluent view over the [ProxyOptions] of a fake of type `T`.
///
/// Every call is recorded, in order, on the underlying options: calls are cumulative and their
/// order matters.
///
/// `T` only names the faked type at the call site, ie the key [create_fake_of] fakes is
/// `TypeKey::of::<T>()`. It doesn't constrain the recorded options: the wrapped instance is any
/// [CallTarget] and configuration actions receive the untyped [FakeObject]. `T` defaults to
/// `dyn Any` for views that don't know the faked type statically.
///
/// [create_fake_of]: crate::creation::FakeAndDummyManager::create_fake_of
pub struct FakeOptions<'a, T: ?Sized = dyn Any> {
    proxy_options: &'a mut ProxyOptions,
    _faked_type: PhantomData<fn(&T)>,
}

impl<'a, T: ?Sized> FakeOptions<'a, T> {
    /// View recording on the given options.
    pub fn new(proxy_options: &'a mut ProxyOptions) -> Self {
        Self {
            proxy_options,
            _faked_type: PhantomData,
        }
    }

    /// The same options, viewed as the options of a fake of type `U`.
    pub fn typed<U: ?Sized>(&mut self) -> FakeOptions<'_, U> {
        FakeOptions::new(&mut *self.proxy_options)
    }

    /// Pass these arguments to the constructor of the faked type, instead of dummies.
    ///
    /// Replace any previously given arguments.
    pub fn with_arguments_for_constructor<I>(&mut self, arguments: I) -> &mut Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.proxy_options
            .set_arguments_for_constructor(arguments.into_iter().collect());
        self
    }

    /// Stamp the attribute built by the given factory on the fake.
    pub fn with_attribute<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> Attribute + Send + Sync + 'static,
    {
        self.proxy_options.add_attribute(AttributeSpec::new(factory));
        self
    }

    /// Stamp all the given attributes on the fake.
    pub fn with_attributes<I>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = AttributeSpec>,
    {
        for attribute in attributes {
            self.proxy_options.add_attribute(attribute);
        }
        self
    }

    /// Forward every call made on the fake to the given instance.
    pub fn wrapping(&mut self, wrapped: Arc<dyn CallTarget>) -> &mut Self {
        self.proxy_options.set_wrapped_instance(wrapped.clone());
        self.configure_fake(move |fake| {
            fake.fake_manager()
                .add_rule_first(Arc::new(WrappedObjectRule::new(wrapped)));
        })
    }

    /// Make the fake implement the given interface.
    pub fn implements(&mut self, interface: TypeKey) -> &mut Self {
        self.proxy_options.add_interface_to_implement(interface);
        self
    }

    /// Make the fake implement the interface `I`, usually a trait object type.
    pub fn implements_type<I: ?Sized + 'static>(&mut self) -> &mut Self {
        self.implements(TypeKey::of::<I>())
    }

    /// Run the given action on the fake right after its creation.
    pub fn configure_fake<F>(&mut self, action: F) -> &mut Self
    where
        F: FnOnce(&FakeObject) + Send + 'static,
    {
        self.proxy_options
            .add_proxy_configuration_action(Box::new(action));
        self
    }
}

/// Default options applied to every fake of the types it supports.
pub trait FakeOptionsBuilder: Send + Sync {
    /// Check if the builder applies to fakes of the given type.
    fn can_build_options_for(&self, type_key: &TypeKey) -> bool;

    /// Priority of the builder, the highest applicable one is used.
    fn priority(&self) -> i32 {
        0
    }

    /// Record the default options on the given view.
    fn build_options(&self, type_key: &TypeKey, options: &mut FakeOptions<'_>);
}

/// Apply the best [FakeOptionsBuilder] to the options of a fake.
pub struct DynamicOptionsBuilder {
    builders: Vec<Arc<dyn FakeOptionsBuilder>>,
    logger: Logger,
}

impl DynamicOptionsBuilder {
    /// DynamicOptionsBuilder factory
    pub fn new(builders: Vec<Arc<dyn FakeOptionsBuilder>>, logger: Logger) -> Self {
        Self {
            builders,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Apply the applicable builder of highest priority, the first registered one on a tie.
    pub fn build_options(&self, type_key: &TypeKey, options: &mut FakeOptions<'_>) {
        let best_builder = self
            .builders
            .iter()
            .filter(|builder| builder.can_build_options_for(type_key))
            .fold(None, |best: Option<&Arc<dyn FakeOptionsBuilder>>, builder| match best {
                Some(best) if best.priority() >= builder.priority() => Some(best),
                _ => Some(builder),
            });

        if let Some(builder) = best_builder {
            debug!(
                self.logger, "Applying default fake options";
                "type" => %type_key, "priority" => builder.priority()
            );
            builder.build_options(type_key, options);
        }
    }
}
