use std::fmt::{self, Display};

use crate::entities::Value;
use crate::fake::FakeCall;

/// Validate one argument of an intercepted call.
///
/// The [Display] implementation is the description shown in diagnostics.
pub trait ArgumentConstraint: Display + Send + Sync {
    /// Check if the observed argument matches the constraint, `None` meaning no argument.
    fn is_valid(&self, argument: Option<&Value>) -> bool;

    /// Description of the constraint.
    fn constraint_description(&self) -> String {
        self.to_string()
    }

    /// Write the description of the constraint.
    fn write_description(&self, writer: &mut dyn fmt::Write) -> fmt::Result {
        writer.write_str(&self.constraint_description())
    }

    /// Check the argument at the given position of a call.
    fn is_valid_for_call(&self, call: &FakeCall, position: usize) -> bool {
        self.is_valid(call.argument(position))
    }
}
