//! Serialized event sink. Both threads log through the same mutex-guarded
//! writer so lines never interleave mid-way; every line is stamped with the
//! elapsed time since the log was created.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Instant;

use colored::Colorize;

/// Everything the demo makes observable, one variant per log line. Sizes are
/// the buffer length sampled right after the operation in question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ProducerCreatedPack { in_buffer: usize },
    ProducerWroteData { in_buffer: usize },
    ProducerWaitingFull,
    ConsumerReadData { in_buffer: usize },
    ConsumerWaitingEmpty,
    ConsumerProcessedData { in_buffer: usize },
}

pub struct EventLog {
    start: Instant,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl EventLog {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            start: Instant::now(),
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Writes one timestamped line for `event`. Log I/O failures are
    /// swallowed; the simulation does not care whether anyone is listening.
    pub fn record(&self, event: Event) {
        let line = match event {
            Event::ProducerCreatedPack { in_buffer } => format!(
                "{} created new pack of data. In buff: {}",
                "Producer".green(),
                in_buffer
            ),
            Event::ProducerWroteData { in_buffer } => {
                format!("{} wrote data. In buff: {}", "Producer".green(), in_buffer)
            }
            Event::ProducerWaitingFull => {
                format!("{} waiting... (buffer is full)", "Producer".yellow())
            }
            Event::ConsumerReadData { in_buffer } => format!(
                "{} read & deleted data. In buff: {}",
                "Consumer".cyan(),
                in_buffer
            ),
            Event::ConsumerWaitingEmpty => {
                format!("{} waiting... (buffer is empty)", "Consumer".yellow())
            }
            Event::ConsumerProcessedData { in_buffer } => format!(
                "{} processed data. In buff: {}",
                "Consumer".cyan(),
                in_buffer
            ),
        };

        let elapsed = self.start.elapsed().as_secs_f64();
        let mut sink = self.sink.lock().expect("log sink poisoned");
        let _ = writeln!(sink, "[{:>9.3}s] {}", elapsed, line);
    }
}
