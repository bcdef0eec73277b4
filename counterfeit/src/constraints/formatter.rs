use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::entities::{TypeKey, Value};

/// Error raised when an argument value can't be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not format argument value of type '{type_name}': {reason}")]
pub struct FormatError {
    type_name: String,
    reason: String,
}

impl FormatError {
    /// FormatError factory
    pub fn new<T: Into<String>, R: Into<String>>(type_name: T, reason: R) -> Self {
        Self {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// Render argument values for diagnostics.
///
/// Implementations may fail: callers must be ready to fall back to another rendering.
pub trait ArgumentValueFormatter: Send + Sync {
    /// Render the given value, `None` meaning no value.
    fn format_argument_value(&self, value: Option<&Value>) -> Result<String, FormatError>;
}

type CustomFormatterFn = Arc<dyn Fn(&Value) -> Result<String, FormatError> + Send + Sync>;

/// Default [ArgumentValueFormatter].
///
/// Render `NULL` for no value, quoted text for strings, the registered custom rendering of the
/// value type if any, and the [Debug] output of the value otherwise.
#[derive(Default, Clone)]
pub struct DefaultArgumentValueFormatter {
    custom_formatters: HashMap<TypeKey, CustomFormatterFn>,
}

impl DefaultArgumentValueFormatter {
    /// Register a custom rendering for values of type `T`.
    pub fn with_formatter<T, F>(mut self, formatter: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Result<String, FormatError> + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        self.custom_formatters.insert(
            type_key.clone(),
            Arc::new(move |value: &Value| match value.downcast_ref::<T>() {
                Some(value) => formatter(value),
                None => Err(FormatError::new(
                    value.type_name(),
                    format!("custom formatter expects a '{type_key}'"),
                )),
            }),
        );
        self
    }

    fn format_with_debug(value: &Value) -> Result<String, FormatError> {
        let mut output = String::new();
        value
            .write_debug(&mut output)
            .map_err(|_| FormatError::new(value.type_name(), "its debug implementation failed"))?;

        Ok(output)
    }
}

impl ArgumentValueFormatter for DefaultArgumentValueFormatter {
    fn format_argument_value(&self, value: Option<&Value>) -> Result<String, FormatError> {
        let Some(value) = value else {
            return Ok("NULL".to_string());
        };

        if let Some(formatter) = self.custom_formatters.get(&TypeKey::named(value.type_name())) {
            return formatter(value);
        }
        if let Some(text) = value.downcast_ref::<String>() {
            return Ok(format!("\"{text}\""));
        }
        if let Some(text) = value.downcast_ref::<&str>() {
            return Ok(format!("\"{text}\""));
        }

        Self::format_with_debug(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::test::double::BrokenDebug;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Money(u64);

    #[test]
    fn format_no_value_as_null() {
        let formatter = DefaultArgumentValueFormatter::default();

        assert_eq!("NULL", formatter.format_argument_value(None).unwrap());
    }

    #[test]
    fn format_strings_with_quotes() {
        let formatter = DefaultArgumentValueFormatter::default();

        assert_eq!(
            "\"text\"",
            formatter
                .format_argument_value(Some(&Value::new("text".to_string())))
                .unwrap()
        );
        assert_eq!(
            "\"slice\"",
            formatter.format_argument_value(Some(&Value::new("slice"))).unwrap()
        );
    }

    #[test]
    fn format_other_values_with_their_debug_output() {
        let formatter = DefaultArgumentValueFormatter::default();

        assert_eq!("42", formatter.format_argument_value(Some(&Value::new(42))).unwrap());
        assert_eq!(
            "Money(3)",
            formatter.format_argument_value(Some(&Value::new(Money(3)))).unwrap()
        );
    }

    #[test]
    fn format_with_the_custom_formatter_registered_for_the_value_type() {
        let formatter = DefaultArgumentValueFormatter::default()
            .with_formatter(|money: &Money| Ok(format!("${}", money.0)));

        assert_eq!(
            "$12",
            formatter.format_argument_value(Some(&Value::new(Money(12)))).unwrap()
        );
        assert_eq!("7", formatter.format_argument_value(Some(&Value::new(7))).unwrap());
    }

    #[test]
    fn format_fails_when_the_debug_implementation_fails() {
        let formatter = DefaultArgumentValueFormatter::default();

        let error = formatter
            .format_argument_value(Some(&Value::new(BrokenDebug)))
            .expect_err("Formatting a value with a failing debug implementation should fail");

        assert_eq!(
            FormatError::new(
                std::any::type_name::<BrokenDebug>(),
                "its debug implementation failed"
            ),
            error
        );
    }
}
