use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::constraints::{ArgumentConstraint, ArgumentValueFormatter, DefaultArgumentValueFormatter};
use crate::entities::Value;
use crate::fake::try_get_fake_manager;

/// Argument constraint matching arguments equal to an expected value.
///
/// Equality is value equality, not identity. No expected value matches no argument.
#[derive(Clone)]
pub struct EqualityArgumentConstraint {
    expected_value: Option<Value>,
    formatter: Arc<dyn ArgumentValueFormatter>,
}

impl EqualityArgumentConstraint {
    /// Constraint described with the [DefaultArgumentValueFormatter].
    pub fn new(expected_value: Option<Value>) -> Self {
        Self::with_formatter(expected_value, Arc::new(DefaultArgumentValueFormatter::default()))
    }

    /// Constraint described with the given formatter.
    pub fn with_formatter(
        expected_value: Option<Value>,
        formatter: Arc<dyn ArgumentValueFormatter>,
    ) -> Self {
        Self {
            expected_value,
            formatter,
        }
    }

    /// The expected value.
    pub fn expected_value(&self) -> Option<&Value> {
        self.expected_value.as_ref()
    }

    /// Description used when the formatter can't render the expected value.
    fn fallback_description(&self) -> String {
        match &self.expected_value {
            None => "NULL".to_string(),
            Some(value) => match try_get_fake_manager(value) {
                Some(manager) => format!("Faked {}", manager.faked_type()),
                None => value.type_name().to_string(),
            },
        }
    }
}

impl ArgumentConstraint for EqualityArgumentConstraint {
    fn is_valid(&self, argument: Option<&Value>) -> bool {
        self.expected_value.as_ref() == argument
    }
}

impl Display for EqualityArgumentConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let description = self
            .formatter
            .format_argument_value(self.expected_value.as_ref())
            .unwrap_or_else(|_| self.fallback_description());

        f.write_str(&description)
    }
}
