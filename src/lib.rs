//! Bounded-buffer producer/consumer demo.
//!
//! One producer thread generates items at random intervals and appends them
//! to a shared fixed-capacity buffer; one consumer thread removes and
//! processes them at its own pace. [`BoundedBuffer`] carries the whole
//! synchronization protocol: one mutex, two condition variables, blocking
//! `put`/`take`, and a cooperative `close` for clean shutdown.

pub mod actors;
pub mod buffer;
pub mod config;
pub mod error;
pub mod event;

pub use actors::{run_consumer, run_producer, Item};
pub use buffer::BoundedBuffer;
pub use config::SimConfig;
pub use error::{BufferError, ConfigError, TryPutError};
pub use event::{Event, EventLog};
