//! Test doubles shared by the unit tests of the crate.

mod formatting;
mod proxy_factory;
mod sample_types;

pub use formatting::{BrokenDebug, FailingFormatter};
pub use proxy_factory::RecordingProxyFactory;
pub use sample_types::*;
