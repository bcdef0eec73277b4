use std::any::Any;
use std::sync::Arc;

use slog::{Logger, debug, warn};

use crate::creation::{
    DummyCreationSession, DummyValueResolver, DynamicOptionsBuilder, FakeCreationError,
    FakeObjectCreator, FakeOptions, ProxyOptions,
};
use crate::entities::{TypeKey, Value};
use crate::fake::FakeObject;
use crate::logging::LoggerExtensions;

/// Entry point to create dummies and fakes.
///
/// Every call is a top level request with its own resolution session.
pub trait FakeAndDummyManager: Send + Sync {
    /// Create a dummy of the given type, failing if none can be resolved.
    fn create_dummy(&self, type_key: &TypeKey) -> Result<Value, FakeCreationError>;

    /// Create a dummy of the given type, `None` if none can be resolved.
    fn try_create_dummy(&self, type_key: &TypeKey) -> Option<Value>;

    /// Create a fake of the given type customized by the given options builder.
    ///
    /// The builder is called once, after the registered default options are applied.
    fn create_fake(
        &self,
        type_key: &TypeKey,
        options_builder: &mut dyn FnMut(&mut FakeOptions<'_>),
    ) -> Result<FakeObject, FakeCreationError>;

    /// Create a dummy of type `T`.
    fn create_dummy_of<T>(&self) -> Result<T, FakeCreationError>
    where
        Self: Sized,
        T: Any + Clone,
    {
        let type_key = TypeKey::of::<T>();
        let value = self.create_dummy(&type_key)?;

        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| FakeCreationError::UnexpectedValueType {
                expected: type_key,
                actual: value.type_name().to_string(),
            })
    }

    /// Create a fake of type `T`, usually a trait object type.
    fn create_fake_of<T, F>(&self, options_builder: F) -> Result<FakeObject, FakeCreationError>
    where
        Self: Sized,
        T: ?Sized + 'static,
        F: FnOnce(&mut FakeOptions<'_, T>),
    {
        let mut options_builder = Some(options_builder);
        self.create_fake(&TypeKey::of::<T>(), &mut |options| {
            if let Some(options_builder) = options_builder.take() {
                options_builder(&mut options.typed::<T>());
            }
        })
    }
}

/// Default [FakeAndDummyManager].
pub struct DefaultFakeAndDummyManager {
    dummy_value_resolver: Arc<dyn DummyValueResolver>,
    fake_creator: Arc<FakeObjectCreator>,
    dynamic_options_builder: DynamicOptionsBuilder,
    logger: Logger,
}

impl DefaultFakeAndDummyManager {
    /// DefaultFakeAndDummyManager factory
    pub fn new(
        dummy_value_resolver: Arc<dyn DummyValueResolver>,
        fake_creator: Arc<FakeObjectCreator>,
        dynamic_options_builder: DynamicOptionsBuilder,
        logger: Logger,
    ) -> Self {
        Self {
            dummy_value_resolver,
            fake_creator,
            dynamic_options_builder,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    fn build_proxy_options(
        &self,
        type_key: &TypeKey,
        options_builder: &mut dyn FnMut(&mut FakeOptions<'_>),
    ) -> ProxyOptions {
        let mut proxy_options = ProxyOptions::new();
        let mut options = FakeOptions::new(&mut proxy_options);

        self.dynamic_options_builder.build_options(type_key, &mut options);
        options_builder(&mut options);

        proxy_options
    }
}

impl FakeAndDummyManager for DefaultFakeAndDummyManager {
    fn create_dummy(&self, type_key: &TypeKey) -> Result<Value, FakeCreationError> {
        self.try_create_dummy(type_key).ok_or_else(|| {
            warn!(self.logger, "Failed to create dummy"; "type" => %type_key);
            FakeCreationError::DummyCreation(type_key.clone())
        })
    }

    fn try_create_dummy(&self, type_key: &TypeKey) -> Option<Value> {
        debug!(self.logger, ">> try_create_dummy"; "type" => %type_key);
        self.dummy_value_resolver
            .try_resolve_dummy_value(&mut DummyCreationSession::new(), type_key)
    }

    fn create_fake(
        &self,
        type_key: &TypeKey,
        options_builder: &mut dyn FnMut(&mut FakeOptions<'_>),
    ) -> Result<FakeObject, FakeCreationError> {
        debug!(self.logger, ">> create_fake"; "type" => %type_key);
        let proxy_options = self.build_proxy_options(type_key, options_builder);

        self.fake_creator
            .create_fake(
                type_key,
                proxy_options,
                &mut DummyCreationSession::new(),
                self.dummy_value_resolver.as_ref(),
            )
            .inspect_err(|error| {
                warn!(
                    self.logger, "Failed to create fake";
                    "type" => %type_key, "error" => %error
                )
            })
    }
}
