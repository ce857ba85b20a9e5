//! The two driver loops. Each runs until the stop token is set or the
//! buffer reports closed, and returns how many items it moved so callers
//! can check the books afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::buffer::BoundedBuffer;
use crate::config::SimConfig;
use crate::event::{Event, EventLog};

/// Placeholder payload. The reference pushed the constant `1`; a sequence
/// number costs the same and lets tests verify no item is lost or duplicated.
pub type Item = u64;

fn jitter_sleep(upper_ms: u64) {
    if upper_ms == 0 {
        return;
    }
    let ms = rand::thread_rng().gen_range(0..=upper_ms);
    thread::sleep(Duration::from_millis(ms));
}

fn service_sleep(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Generates items and feeds them into the buffer, blocking whenever it is
/// full. Returns the number of items successfully written.
pub fn run_producer(
    buffer: &BoundedBuffer<Item>,
    config: &SimConfig,
    log: &EventLog,
    stop: &AtomicBool,
) -> u64 {
    let mut produced = 0u64;
    while !stop.load(Ordering::Relaxed) {
        // Emulates the time it takes to create a pack of data.
        jitter_sleep(config.producer_jitter_ms);
        log.record(Event::ProducerCreatedPack {
            in_buffer: buffer.len(),
        });

        if buffer.is_full() {
            log.record(Event::ProducerWaitingFull);
        }
        if buffer.put(produced).is_err() {
            break;
        }
        produced += 1;
        log.record(Event::ProducerWroteData {
            in_buffer: buffer.len(),
        });

        service_sleep(config.producer_service_ms);
    }
    produced
}

/// Drains the buffer, blocking whenever it is empty. Returns the number of
/// items read.
pub fn run_consumer(
    buffer: &BoundedBuffer<Item>,
    config: &SimConfig,
    log: &EventLog,
    stop: &AtomicBool,
) -> u64 {
    let mut consumed = 0u64;
    while !stop.load(Ordering::Relaxed) {
        if buffer.is_empty() {
            log.record(Event::ConsumerWaitingEmpty);
        }
        if buffer.take().is_err() {
            break;
        }
        consumed += 1;
        log.record(Event::ConsumerReadData {
            in_buffer: buffer.len(),
        });

        service_sleep(config.consumer_service_ms);
        // Emulates processing the pack that was just read.
        jitter_sleep(config.consumer_jitter_ms);
        log.record(Event::ConsumerProcessedData {
            in_buffer: buffer.len(),
        });
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;
    use std::time::Instant;

    fn zero_delay_config(capacity: usize) -> SimConfig {
        SimConfig {
            capacity,
            producer_service_ms: 0,
            consumer_service_ms: 0,
            producer_jitter_ms: 0,
            consumer_jitter_ms: 0,
        }
    }

    fn silent_log() -> Arc<EventLog> {
        Arc::new(EventLog::new(io::sink()))
    }

    #[test]
    fn test_actors_shut_down_cleanly_and_lose_nothing() {
        let config = zero_delay_config(4);
        let buffer = Arc::new(BoundedBuffer::<Item>::new(config.capacity));
        let log = silent_log();
        let stop = Arc::new(AtomicBool::new(false));

        let producer = {
            let (buffer, config, log, stop) =
                (Arc::clone(&buffer), config.clone(), Arc::clone(&log), Arc::clone(&stop));
            thread::spawn(move || run_producer(&buffer, &config, &log, &stop))
        };
        let consumer = {
            let (buffer, config, log, stop) =
                (Arc::clone(&buffer), config.clone(), Arc::clone(&log), Arc::clone(&stop));
            thread::spawn(move || run_consumer(&buffer, &config, &log, &stop))
        };

        thread::sleep(Duration::from_millis(100));
        stop.store(true, Ordering::SeqCst);
        buffer.close();

        let produced = producer.join().unwrap();
        let consumed = consumer.join().unwrap();

        assert!(produced > 0, "no forward progress");

        // Whatever the consumer did not get to is still in the buffer.
        let mut residue = 0u64;
        while buffer.try_take().is_some() {
            residue += 1;
        }
        assert_eq!(produced, consumed + residue);
    }

    #[test]
    fn test_producer_stops_on_closed_buffer() {
        let config = zero_delay_config(1);
        let buffer = BoundedBuffer::<Item>::new(config.capacity);
        let log = EventLog::new(io::sink());
        let stop = AtomicBool::new(false);

        buffer.close();
        let start = Instant::now();
        let produced = run_producer(&buffer, &config, &log, &stop);
        assert_eq!(produced, 0);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_consumer_drains_then_stops_on_closed_buffer() {
        let config = zero_delay_config(4);
        let buffer = BoundedBuffer::<Item>::new(config.capacity);
        let log = EventLog::new(io::sink());
        let stop = AtomicBool::new(false);

        for i in 0..3 {
            buffer.put(i).unwrap();
        }
        buffer.close();

        let consumed = run_consumer(&buffer, &config, &log, &stop);
        assert_eq!(consumed, 3);
        assert!(buffer.is_empty());
    }
}
