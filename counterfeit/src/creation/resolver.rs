use std::sync::Arc;

use slog::{Logger, debug, trace};

use crate::DummyFallbackPolicy;
use crate::creation::{
    DummyCreationSession, DummyFactoryRegistry, FakeObjectCreator, ProxyOptions,
    ResolutionOutcome,
};
use crate::entities::{TypeCatalog, TypeDescriptor, TypeKey, TypeKind, Value};
use crate::logging::LoggerExtensions;

/// Resolve the dummy value of a type.
pub trait DummyValueResolver: Send + Sync {
    /// Try to produce a dummy of the given type within the given session.
    ///
    /// Failing is routine: `None` is returned for unknown types, dependency cycles, or types
    /// none of the resolution strategies can build.
    fn try_resolve_dummy_value(
        &self,
        session: &mut DummyCreationSession,
        type_key: &TypeKey,
    ) -> Option<Value>;
}

/// Ways to build a dummy, tried in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionStrategy {
    /// A dummy factory registered for the type.
    DummyFactory,
    /// The default value of a primitive or registered default type.
    DefaultValue,
    /// The public constructor with the most parameters that can all be resolved.
    Constructor,
    /// An unconfigured fake of an interface or abstract type.
    Fake,
}

/// [DummyValueResolver] using the [ResolutionStrategy] in order, first success wins.
pub struct DefaultDummyValueResolver {
    catalog: Arc<TypeCatalog>,
    dummy_factories: Arc<dyn DummyFactoryRegistry>,
    fake_creator: Option<Arc<FakeObjectCreator>>,
    fallback_policy: DummyFallbackPolicy,
    logger: Logger,
}

impl DefaultDummyValueResolver {
    /// DefaultDummyValueResolver factory
    ///
    /// Without a fake creator, interfaces and abstract types are never resolved.
    pub fn new(
        catalog: Arc<TypeCatalog>,
        dummy_factories: Arc<dyn DummyFactoryRegistry>,
        fake_creator: Option<Arc<FakeObjectCreator>>,
        fallback_policy: DummyFallbackPolicy,
        logger: Logger,
    ) -> Self {
        Self {
            catalog,
            dummy_factories,
            fake_creator,
            fallback_policy,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    fn resolve_with_strategies<I>(
        &self,
        strategies: I,
        session: &mut DummyCreationSession,
        type_key: &TypeKey,
    ) -> Option<(ResolutionStrategy, Value)>
    where
        I: IntoIterator<Item = ResolutionStrategy>,
    {
        strategies.into_iter().find_map(|strategy| {
            let value = self.resolve_with(strategy, session, type_key)?;
            trace!(
                self.logger, "Resolved dummy";
                "type" => %type_key, "strategy" => %strategy
            );
            Some((strategy, value))
        })
    }

    fn resolve_with(
        &self,
        strategy: ResolutionStrategy,
        session: &mut DummyCreationSession,
        type_key: &TypeKey,
    ) -> Option<Value> {
        match strategy {
            ResolutionStrategy::DummyFactory => self.resolve_from_dummy_factory(type_key),
            ResolutionStrategy::DefaultValue => self.catalog.default_value(type_key),
            ResolutionStrategy::Constructor => {
                let descriptor = self.catalog.descriptor(type_key)?;
                self.resolve_by_instantiating(&descriptor, session)
            }
            ResolutionStrategy::Fake => {
                let descriptor = self.catalog.descriptor(type_key)?;
                self.resolve_by_creating_fake(&descriptor, session)
            }
        }
    }

    fn resolve_from_dummy_factory(&self, type_key: &TypeKey) -> Option<Value> {
        let factory = self.dummy_factories.lookup(type_key)?;
        factory
            .create()
            .inspect_err(|error| {
                debug!(
                    self.logger, "Dummy factory failed";
                    "type" => %type_key, "error" => format!("{error:#}")
                )
            })
            .ok()
    }

    fn resolve_by_instantiating(
        &self,
        descriptor: &TypeDescriptor,
        session: &mut DummyCreationSession,
    ) -> Option<Value> {
        if !descriptor.kind().is_instantiable() {
            return None;
        }

        'constructors: for constructor in descriptor.public_constructors_by_descending_arity() {
            let mut arguments = Vec::with_capacity(constructor.arity());
            for parameter in constructor.parameters() {
                match self.try_resolve_dummy_value(session, parameter) {
                    Some(argument) => arguments.push(argument),
                    None => continue 'constructors,
                }
            }

            match constructor.invoke(&arguments) {
                Ok(value) => return Some(value),
                Err(error) => debug!(
                    self.logger, "Constructor failed with dummy arguments";
                    "type" => %descriptor.key(), "signature" => constructor.signature(),
                    "error" => format!("{error:#}")
                ),
            }
        }

        None
    }

    fn resolve_by_creating_fake(
        &self,
        descriptor: &TypeDescriptor,
        session: &mut DummyCreationSession,
    ) -> Option<Value> {
        if !matches!(descriptor.kind(), TypeKind::Interface | TypeKind::Abstract)
            || self.fallback_policy != DummyFallbackPolicy::Fake
        {
            return None;
        }
        let fake_creator = self.fake_creator.as_ref()?;

        fake_creator
            .try_create_fake(descriptor.key(), ProxyOptions::new(), session, self)
            .map(Value::new)
    }
}

impl DummyValueResolver for DefaultDummyValueResolver {
    fn try_resolve_dummy_value(
        &self,
        session: &mut DummyCreationSession,
        type_key: &TypeKey,
    ) -> Option<Value> {
        use strum::IntoEnumIterator;

        let strategies: Vec<ResolutionStrategy> = match session.outcome(type_key) {
            Some(ResolutionOutcome::Resolved(strategy)) => vec![*strategy],
            Some(ResolutionOutcome::Unresolvable) => return None,
            None => ResolutionStrategy::iter().collect(),
        };
        if !session.try_begin_resolving(type_key) {
            debug!(self.logger, "Dependency cycle detected"; "type" => %type_key);
            return None;
        }

        let resolution = self.resolve_with_strategies(strategies, session, type_key);
        if resolution.is_none() {
            debug!(self.logger, "Could not resolve dummy"; "type" => %type_key);
        }
        let strategy = resolution.as_ref().map(|(strategy, _)| *strategy);
        session.complete_resolution(type_key, strategy);

        resolution.map(|(_, value)| value)
    }
}
