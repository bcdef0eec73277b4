//! Test utilities shared by the unit tests of the crate.

pub mod double;

use std::{io, sync::Arc};

use slog::{Drain, Logger};
use slog_async::Async;
use slog_term::{CompactFormat, PlainDecorator};

use logging::MemoryDrainForTestInspector;

pub struct TestLogger;

impl TestLogger {
    fn from_writer<W: io::Write + Send + 'static>(writer: W) -> Logger {
        let decorator = PlainDecorator::new(writer);
        let drain = CompactFormat::new(decorator).build().fuse();
        let drain = Async::new(drain).build().fuse();
        Logger::root(Arc::new(drain), slog::o!())
    }

    pub fn stdout() -> Logger {
        Self::from_writer(slog_term::TestStdoutWriter)
    }

    /// Logger that keeps its records in memory, with an inspector to search them.
    pub fn memory() -> (Logger, MemoryDrainForTestInspector) {
        let inspector = MemoryDrainForTestInspector::default();
        let logger = Logger::root(inspector.clone().fuse(), slog::o!());
        (logger, inspector)
    }
}
