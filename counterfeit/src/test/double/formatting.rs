use std::fmt::{self, Debug, Formatter};

use crate::constraints::{ArgumentValueFormatter, FormatError};
use crate::entities::Value;

/// A value whose [Debug] implementation always fails.
#[derive(PartialEq)]
pub struct BrokenDebug;

impl Debug for BrokenDebug {
    fn fmt(&self, _f: &mut Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

/// An [ArgumentValueFormatter] that can't format anything.
pub struct FailingFormatter;

impl ArgumentValueFormatter for FailingFormatter {
    fn format_argument_value(&self, value: Option<&Value>) -> Result<String, FormatError> {
        let type_name = value.map(Value::type_name).unwrap_or("NULL");
        Err(FormatError::new(type_name, "formatter failure"))
    }
}
