use std::path::Path;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;

use prodcons::{run_consumer, run_producer, BoundedBuffer, ConfigError, EventLog, Item, SimConfig};

const CONFIG_PATH: &str = "prodcons.toml";

fn load_config() -> Result<SimConfig, ConfigError> {
    if Path::new(CONFIG_PATH).exists() {
        SimConfig::load(CONFIG_PATH)
    } else {
        Ok(SimConfig::default())
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let buffer = Arc::new(BoundedBuffer::<Item>::new(config.capacity));
    let log = Arc::new(EventLog::stdout());
    // The demo runs until externally interrupted; the stop token is here for
    // library users and tests, and stays unset in the binary.
    let stop = Arc::new(AtomicBool::new(false));

    let producer = {
        let (buffer, config, log, stop) =
            (Arc::clone(&buffer), config.clone(), Arc::clone(&log), Arc::clone(&stop));
        thread::Builder::new()
            .name("producer".into())
            .spawn(move || run_producer(&buffer, &config, &log, &stop))
            .expect("failed to spawn producer thread")
    };
    let consumer = {
        let (buffer, config, log, stop) =
            (Arc::clone(&buffer), config, Arc::clone(&log), Arc::clone(&stop));
        thread::Builder::new()
            .name("consumer".into())
            .spawn(move || run_consumer(&buffer, &config, &log, &stop))
            .expect("failed to spawn consumer thread")
    };

    let _ = producer.join();
    let _ = consumer.join();
}
