use std::sync::Arc;

use slog::{Logger, debug};

use crate::Configuration;
use crate::creation::{
    CatalogProxyFactory, DefaultDummyValueResolver, DefaultFakeAndDummyManager,
    DummyFactoryRegistry, DynamicOptionsBuilder, FakeObjectCreator, FakeOptionsBuilder,
    InMemoryDummyFactoryRegistry, ProxyFactory,
};
use crate::entities::TypeCatalog;
use crate::logging::LoggerExtensions;

/// Wire the components of a [DefaultFakeAndDummyManager].
///
/// Unset components get their default: a catalog knowing only the primitive types, an empty
/// dummy factory registry and a [CatalogProxyFactory] over the catalog.
pub struct FakeAndDummyManagerBuilder {
    configuration: Configuration,
    catalog: Option<Arc<TypeCatalog>>,
    dummy_factories: Option<Arc<dyn DummyFactoryRegistry>>,
    proxy_factory: Option<Arc<dyn ProxyFactory>>,
    options_builders: Vec<Arc<dyn FakeOptionsBuilder>>,
    root_logger: Logger,
}

impl FakeAndDummyManagerBuilder {
    /// FakeAndDummyManagerBuilder factory
    pub fn new(configuration: Configuration, root_logger: Logger) -> Self {
        Self {
            configuration,
            catalog: None,
            dummy_factories: None,
            proxy_factory: None,
            options_builders: vec![],
            root_logger,
        }
    }

    /// Set the catalog of the types that can be created.
    pub fn with_catalog(mut self, catalog: Arc<TypeCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the registry of the user provided dummy factories.
    pub fn with_dummy_factories(mut self, dummy_factories: Arc<dyn DummyFactoryRegistry>) -> Self {
        self.dummy_factories = Some(dummy_factories);
        self
    }

    /// Set the factory generating the proxies of the fakes.
    pub fn with_proxy_factory(mut self, proxy_factory: Arc<dyn ProxyFactory>) -> Self {
        self.proxy_factory = Some(proxy_factory);
        self
    }

    /// Add a builder of default fake options.
    pub fn with_options_builder(mut self, options_builder: Arc<dyn FakeOptionsBuilder>) -> Self {
        self.options_builders.push(options_builder);
        self
    }

    /// Build the manager.
    pub fn build(self) -> DefaultFakeAndDummyManager {
        let logger = self.root_logger.new_with_component_name::<Self>();
        let catalog = self.catalog.unwrap_or_else(|| Arc::new(TypeCatalog::new()));
        let dummy_factories = self
            .dummy_factories
            .unwrap_or_else(|| Arc::new(InMemoryDummyFactoryRegistry::new()));
        let proxy_factory = self.proxy_factory.unwrap_or_else(|| {
            Arc::new(CatalogProxyFactory::new(
                catalog.clone(),
                self.root_logger.clone(),
            ))
        });
        debug!(
            logger, "Building fake and dummy manager";
            "dummy_fallback_policy" => %self.configuration.dummy_fallback_policy,
            "options_builders" => self.options_builders.len()
        );

        let fake_creator = Arc::new(FakeObjectCreator::new(
            proxy_factory,
            catalog.clone(),
            self.root_logger.clone(),
        ));
        let dummy_value_resolver = Arc::new(DefaultDummyValueResolver::new(
            catalog,
            dummy_factories,
            Some(fake_creator.clone()),
            self.configuration.dummy_fallback_policy,
            self.root_logger.clone(),
        ));
        let dynamic_options_builder =
            DynamicOptionsBuilder::new(self.options_builders, self.root_logger.clone());

        DefaultFakeAndDummyManager::new(
            dummy_value_resolver,
            fake_creator,
            dynamic_options_builder,
            self.root_logger,
        )
    }
}
