//! Constraints matching the arguments of an intercepted call against expectations.

mod argument_constraint;
mod equality_argument_constraint;
mod formatter;

pub use argument_constraint::ArgumentConstraint;
pub use equality_argument_constraint::EqualityArgumentConstraint;
pub use formatter::{ArgumentValueFormatter, DefaultArgumentValueFormatter, FormatError};
