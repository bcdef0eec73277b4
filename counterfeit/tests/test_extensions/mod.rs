#![allow(dead_code)]

pub mod billing;
pub mod recording_proxy_factory;

use std::sync::Arc;

use slog::{Drain, Logger};

use counterfeit::creation::{DummyFactoryRegistry, FakeAndDummyManagerBuilder, ProxyFactory};
use counterfeit::{Configuration, DefaultFakeAndDummyManager};

pub fn test_logger() -> Logger {
    let decorator = slog_term::PlainDecorator::new(slog_term::TestStdoutWriter);
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(Arc::new(drain), slog::o!())
}

/// Manager over the billing catalog.
pub fn billing_manager(configuration: Configuration) -> DefaultFakeAndDummyManager {
    billing_manager_builder(configuration).build()
}

pub fn billing_manager_builder(configuration: Configuration) -> FakeAndDummyManagerBuilder {
    FakeAndDummyManagerBuilder::new(configuration, test_logger())
        .with_catalog(Arc::new(billing::billing_catalog()))
}

pub fn billing_manager_with(
    dummy_factories: Option<Arc<dyn DummyFactoryRegistry>>,
    proxy_factory: Option<Arc<dyn ProxyFactory>>,
) -> DefaultFakeAndDummyManager {
    let mut builder = billing_manager_builder(Configuration::default());
    if let Some(dummy_factories) = dummy_factories {
        builder = builder.with_dummy_factories(dummy_factories);
    }
    if let Some(proxy_factory) = proxy_factory {
        builder = builder.with_proxy_factory(proxy_factory);
    }
    builder.build()
}
