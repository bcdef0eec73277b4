//! Configuration of the engine: defaults overridden by any [config] source.

use anyhow::Context;
use config::{ConfigError, Environment, Map, Source, Value, ValueKind};
use serde::{Deserialize, Serialize};

use crate::StdResult;

/// What to do with a dummy of an interface or abstract type that no dummy factory builds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DummyFallbackPolicy {
    /// Use an unconfigured fake of the type.
    #[default]
    Fake,
    /// Give up: the type is unresolvable.
    Fail,
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Fallback used for the dummies of interfaces and abstract types
    pub dummy_fallback_policy: DummyFallbackPolicy,
}

impl Configuration {
    /// Load the configuration from the default values overridden by the environment variables
    /// starting with the given prefix, ie `COUNTERFEIT_DUMMY_FALLBACK_POLICY=fail` for the
    /// `COUNTERFEIT` prefix.
    pub fn load(env_prefix: &str) -> StdResult<Self> {
        Self::load_from(Environment::with_prefix(env_prefix))
    }

    /// Load the configuration from the default values overridden by the given source.
    pub fn load_from<S>(source: S) -> StdResult<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(DefaultConfiguration::default())
            .add_source(source)
            .build()
            .with_context(|| "Configuration: can not build the configuration sources.")?
            .try_deserialize()
            .with_context(|| "Configuration: invalid configuration values.")
    }
}

/// Default configuration with all the default values for configurations.
#[derive(Debug, Clone)]
pub struct DefaultConfiguration {
    /// Fallback used for the dummies of interfaces and abstract types
    pub dummy_fallback_policy: String,
}

impl DefaultConfiguration {
    fn namespace() -> String {
        "default configuration".to_string()
    }
}

impl Default for DefaultConfiguration {
    fn default() -> Self {
        Self {
            dummy_fallback_policy: DummyFallbackPolicy::default().to_string(),
        }
    }
}

impl Source for DefaultConfiguration {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        fn into_value<V: Into<ValueKind>>(value: V) -> Value {
            Value::new(Some(&DefaultConfiguration::namespace()), value.into())
        }
        let mut result = Map::new();
        let myself = self.clone();

        result.insert(
            "dummy_fallback_policy".to_string(),
            into_value(myself.dummy_fallback_policy),
        );

        Ok(result)
    }
}
