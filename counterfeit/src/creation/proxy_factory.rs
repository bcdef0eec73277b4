use std::sync::Arc;

use slog::{Logger, debug};
use thiserror::Error;

use crate::creation::ProxyOptions;
use crate::entities::{TypeCatalog, TypeDescriptor, TypeKey, TypeKind, Value};
use crate::fake::{FakeManager, FakeObject};
use crate::logging::LoggerExtensions;

/// Reasons for a [ProxyFactory] to refuse to generate a proxy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProxyGenerationFailure {
    /// The type is not described in the catalog.
    #[error("The type '{0}' is unknown.")]
    UnknownType(TypeKey),

    /// The type can't be proxied.
    #[error("The type '{0}' is sealed and can not be faked.")]
    SealedType(TypeKey),

    /// An additional interface is not an interface.
    #[error("The type '{0}' is not an interface and can not be implemented by a fake.")]
    NotAnInterface(TypeKey),

    /// Arguments for constructor were given for an interface.
    #[error("Arguments for constructor can not be specified for the interface '{0}'.")]
    ArgumentsForInterface(TypeKey),

    /// No public constructor accepts the arguments.
    #[error("No constructor of '{type_key}' matches the arguments {arguments}.")]
    NoMatchingConstructor {
        /// Faked type.
        type_key: TypeKey,
        /// Types of the given arguments.
        arguments: String,
    },

    /// More than one public constructor accepts the arguments.
    #[error("More than one constructor of '{type_key}' matches the arguments {arguments}.")]
    AmbiguousConstructor {
        /// Faked type.
        type_key: TypeKey,
        /// Types of the given arguments.
        arguments: String,
    },

    /// The selected constructor failed.
    #[error("The constructor {signature} of '{type_key}' failed: {reason}")]
    ConstructorFailed {
        /// Faked type.
        type_key: TypeKey,
        /// Signature of the failing constructor.
        signature: String,
        /// Error raised by the constructor.
        reason: String,
    },
}

/// Generate the proxies backing the fakes.
pub trait ProxyFactory: Send + Sync {
    /// Generate a proxy of the given type, customized by the options.
    ///
    /// `arguments_for_constructor` are passed to the constructor of the faked type, `None`
    /// meaning its parameterless constructor. Incompatible requests are refused with a
    /// [ProxyGenerationFailure].
    fn generate_proxy(
        &self,
        type_key: &TypeKey,
        options: &ProxyOptions,
        arguments_for_constructor: Option<&[Value]>,
    ) -> Result<FakeObject, ProxyGenerationFailure>;
}

/// [ProxyFactory] generating proxies of the types described in a [TypeCatalog].
pub struct CatalogProxyFactory {
    catalog: Arc<TypeCatalog>,
    logger: Logger,
}

impl CatalogProxyFactory {
    /// CatalogProxyFactory factory
    pub fn new(catalog: Arc<TypeCatalog>, logger: Logger) -> Self {
        Self {
            catalog,
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    fn describe_arguments(arguments: &[Value]) -> String {
        let types: Vec<String> = arguments
            .iter()
            .map(|argument| crate::logging::short_type_name(argument.type_name()))
            .collect();
        format!("({})", types.join(", "))
    }

    /// Interfaces implemented by the proxy: the declared ones of the type then the additional
    /// ones, without duplicates.
    fn implemented_interfaces(
        &self,
        descriptor: &TypeDescriptor,
        options: &ProxyOptions,
    ) -> Result<Vec<TypeKey>, ProxyGenerationFailure> {
        let mut interfaces: Vec<TypeKey> = vec![];
        for interface in descriptor.interfaces() {
            if !interfaces.contains(interface) {
                interfaces.push(interface.clone());
            }
        }
        for interface in options.additional_interfaces() {
            match self.catalog.descriptor(interface) {
                Some(interface_descriptor)
                    if interface_descriptor.kind() == TypeKind::Interface => {}
                _ => return Err(ProxyGenerationFailure::NotAnInterface(interface.clone())),
            }
            if interface != descriptor.key() && !interfaces.contains(interface) {
                interfaces.push(interface.clone());
            }
        }

        Ok(interfaces)
    }

    fn build_base_instance(
        &self,
        descriptor: &TypeDescriptor,
        arguments: &[Value],
    ) -> Result<Value, ProxyGenerationFailure> {
        let type_key = descriptor.key();
        let matching_constructors: Vec<_> = descriptor
            .constructors()
            .iter()
            .filter(|constructor| constructor.is_public() && constructor.accepts(arguments))
            .collect();

        let constructor = match matching_constructors.as_slice() {
            [constructor] => constructor,
            [] => {
                return Err(ProxyGenerationFailure::NoMatchingConstructor {
                    type_key: type_key.clone(),
                    arguments: Self::describe_arguments(arguments),
                });
            }
            _ => {
                return Err(ProxyGenerationFailure::AmbiguousConstructor {
                    type_key: type_key.clone(),
                    arguments: Self::describe_arguments(arguments),
                });
            }
        };

        constructor
            .invoke(arguments)
            .map_err(|error| ProxyGenerationFailure::ConstructorFailed {
                type_key: type_key.clone(),
                signature: constructor.signature(),
                reason: format!("{error:#}"),
            })
    }
}

impl ProxyFactory for CatalogProxyFactory {
    fn generate_proxy(
        &self,
        type_key: &TypeKey,
        options: &ProxyOptions,
        arguments_for_constructor: Option<&[Value]>,
    ) -> Result<FakeObject, ProxyGenerationFailure> {
        let descriptor = self
            .catalog
            .descriptor(type_key)
            .ok_or_else(|| ProxyGenerationFailure::UnknownType(type_key.clone()))?;
        if !descriptor.kind().is_proxiable() {
            return Err(ProxyGenerationFailure::SealedType(type_key.clone()));
        }

        let interfaces = self.implemented_interfaces(&descriptor, options)?;
        let arguments = arguments_for_constructor.unwrap_or_default();
        let base_instance = match descriptor.kind() {
            TypeKind::Interface if !arguments.is_empty() => {
                return Err(ProxyGenerationFailure::ArgumentsForInterface(type_key.clone()));
            }
            TypeKind::Interface => None,
            _ => Some(self.build_base_instance(&descriptor, arguments)?),
        };
        let attributes = options.attributes().iter().map(|spec| spec.build()).collect();

        debug!(
            self.logger, "Generated proxy";
            "type" => %type_key,
            "interfaces" => interfaces.len(),
            "arguments" => arguments.len(),
            "is_wrapping" => options.wrapped_instance().is_some()
        );

        Ok(FakeObject::new(
            FakeManager::new(type_key.clone()),
            interfaces,
            attributes,
            base_instance,
        ))
    }
}
