use std::sync::Arc;

use slog::{Logger, debug, trace};

use crate::creation::{
    ConstructorAttempt, ConstructorAttemptFailure, ConstructorAttempts, DummyCreationSession,
    DummyValueResolver, FakeCreationError, ProxyFactory, ProxyOptions,
};
use crate::entities::{ConstructorInfo, TypeCatalog, TypeKey, Value};
use crate::fake::FakeObject;
use crate::logging::LoggerExtensions;

/// Create fakes: generate their proxy then run their configuration actions.
///
/// When no constructor arguments are specified, the creator first asks for a proxy without
/// arguments, then tries the public constructors of the faked type from the one with the most
/// parameters, using dummies as arguments.
pub struct FakeObjectCreator {
    proxy_factory: Arc<dyn ProxyFactory>,
    catalog: Arc<TypeCatalog>,
    logger: Logger,
}

impl FakeObjectCreator {
    /// FakeObjectCreator factory
    pub fn new(
        proxy_factory: Arc<dyn ProxyFactory>,
        catalog: Arc<TypeCatalog>,
        logger: Logger,
    ) -> Self {
        Self {
            proxy_factory,
            catalog,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Create a fake, failing with a description of every attempt if no proxy can be generated.
    pub fn create_fake(
        &self,
        type_key: &TypeKey,
        mut proxy_options: ProxyOptions,
        session: &mut DummyCreationSession,
        resolver: &dyn DummyValueResolver,
    ) -> Result<FakeObject, FakeCreationError> {
        let fake = self.generate_proxy(type_key, &proxy_options, session, resolver)?;

        let actions = proxy_options.take_configuration_actions();
        trace!(
            self.logger, "Applying configuration actions";
            "type" => %type_key, "actions" => actions.len()
        );
        for action in actions {
            action(&fake);
        }

        Ok(fake)
    }

    /// Create a fake, returning `None` if no proxy can be generated.
    pub fn try_create_fake(
        &self,
        type_key: &TypeKey,
        proxy_options: ProxyOptions,
        session: &mut DummyCreationSession,
        resolver: &dyn DummyValueResolver,
    ) -> Option<FakeObject> {
        self.create_fake(type_key, proxy_options, session, resolver)
            .inspect_err(|error| {
                debug!(
                    self.logger, "Could not create fake";
                    "type" => %type_key, "reason" => %error
                )
            })
            .ok()
    }

    fn generate_proxy(
        &self,
        type_key: &TypeKey,
        proxy_options: &ProxyOptions,
        session: &mut DummyCreationSession,
        resolver: &dyn DummyValueResolver,
    ) -> Result<FakeObject, FakeCreationError> {
        if let Some(arguments) = proxy_options.arguments_for_constructor() {
            return self
                .proxy_factory
                .generate_proxy(type_key, proxy_options, Some(arguments))
                .map_err(|reason| FakeCreationError::ArgumentsForConstructorRejected {
                    type_key: type_key.clone(),
                    reason,
                });
        }

        let mut attempts = vec![];
        match self.proxy_factory.generate_proxy(type_key, proxy_options, None) {
            Ok(fake) => return Ok(fake),
            Err(failure) => attempts.push(ConstructorAttempt {
                signature: None,
                failure: ConstructorAttemptFailure::ProxyGeneration(failure),
            }),
        }

        if let Some(descriptor) = self.catalog.descriptor(type_key) {
            for constructor in descriptor.public_constructors_by_descending_arity() {
                if constructor.arity() == 0 {
                    continue;
                }
                let attempt = self.try_with_constructor(
                    type_key,
                    proxy_options,
                    constructor,
                    session,
                    resolver,
                );
                match attempt {
                    Ok(fake) => return Ok(fake),
                    Err(failure) => attempts.push(ConstructorAttempt {
                        signature: Some(constructor.signature()),
                        failure,
                    }),
                }
            }
        }

        Err(FakeCreationError::ProxyGeneration {
            type_key: type_key.clone(),
            attempts: ConstructorAttempts(attempts),
        })
    }

    fn try_with_constructor(
        &self,
        type_key: &TypeKey,
        proxy_options: &ProxyOptions,
        constructor: &ConstructorInfo,
        session: &mut DummyCreationSession,
        resolver: &dyn DummyValueResolver,
    ) -> Result<FakeObject, ConstructorAttemptFailure> {
        let arguments = constructor
            .parameters()
            .iter()
            .map(|parameter| {
                resolver
                    .try_resolve_dummy_value(session, parameter)
                    .ok_or_else(|| {
                        ConstructorAttemptFailure::UnresolvedParameter(parameter.clone())
                    })
            })
            .collect::<Result<Vec<Value>, _>>()?;

        trace!(
            self.logger, "Trying constructor with dummy arguments";
            "type" => %type_key, "signature" => constructor.signature()
        );
        self.proxy_factory
            .generate_proxy(type_key, proxy_options, Some(&arguments))
            .map_err(ConstructorAttemptFailure::ProxyGeneration)
    }
}
