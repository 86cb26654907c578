use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);
pub const DEFAULT_KEY_INTERVAL: Duration = Duration::from_millis(250);
pub const DEFAULT_OUTPUT_CAPACITY: usize = 64;
pub const DEFAULT_INPUT_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    /// How often the loop polls for a key and ticks the machine.
    pub tick_interval: Duration,
    /// Delay between keys typed by the simulated customer.
    pub key_interval: Duration,
    /// Capacity of the broadcast channel carrying progress notices.
    pub output_capacity: usize,
    /// Capacity of the key queue between the input adapter and the loop.
    pub input_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            key_interval: DEFAULT_KEY_INTERVAL,
            output_capacity: DEFAULT_OUTPUT_CAPACITY,
            input_capacity: DEFAULT_INPUT_CAPACITY,
        }
    }
}
