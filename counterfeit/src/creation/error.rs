use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::creation::ProxyGenerationFailure;
use crate::entities::TypeKey;

/// Why an attempt to build a proxy with a given constructor failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorAttemptFailure {
    /// A parameter of the constructor could not be resolved as a dummy.
    UnresolvedParameter(TypeKey),
    /// The proxy factory refused the resolved arguments.
    ProxyGeneration(ProxyGenerationFailure),
}

/// One failed attempt to build a proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorAttempt {
    /// Signature of the constructor, `None` for the attempt made without arguments.
    pub signature: Option<String>,
    /// Why the attempt failed.
    pub failure: ConstructorAttemptFailure,
}

impl Display for ConstructorAttempt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.signature {
            Some(signature) => writeln!(f, "  Constructor with signature {signature}:")?,
            None => writeln!(f, "  Without arguments for constructor:")?,
        }
        match &self.failure {
            ConstructorAttemptFailure::UnresolvedParameter(parameter) => writeln!(
                f,
                "    could not resolve a dummy value for parameter '{parameter}'"
            ),
            ConstructorAttemptFailure::ProxyGeneration(failure) => writeln!(f, "    {failure}"),
        }
    }
}

/// Attempts made to build a proxy, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstructorAttempts(pub Vec<ConstructorAttempt>);

impl Display for ConstructorAttempts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "  No constructor could be attempted.");
        }
        for attempt in &self.0 {
            write!(f, "{attempt}")?;
        }
        Ok(())
    }
}

/// Errors raised by the entry points that must succeed.
#[derive(Error, Debug)]
pub enum FakeCreationError {
    /// No dummy could be resolved for the type.
    #[error("Failed to create dummy of type '{0}'.")]
    DummyCreation(TypeKey),

    /// No proxy could be generated for the type.
    #[error(
        "Failed to create fake of type '{type_key}'. Below is a list of reasons for failure per attempted constructor:\n{attempts}"
    )]
    ProxyGeneration {
        /// Type of the requested fake.
        type_key: TypeKey,
        /// Every attempt made.
        attempts: ConstructorAttempts,
    },

    /// The explicitly given constructor arguments were refused.
    #[error(
        "Failed to create fake of type '{type_key}' with the specified arguments for constructor: {reason}"
    )]
    ArgumentsForConstructorRejected {
        /// Type of the requested fake.
        type_key: TypeKey,
        /// Why the proxy factory refused them.
        reason: ProxyGenerationFailure,
    },

    /// The created value is not of the requested rust type.
    #[error("Created value of type '{actual}' can not be used as a '{expected}'.")]
    UnexpectedValueType {
        /// Requested type.
        expected: TypeKey,
        /// Runtime type of the created value.
        actual: String,
    },
}
