#![warn(missing_docs)]
//! A coin-operated vending machine driven by keys typed at the console

mod config;
mod error;
mod input;
mod machine;

use std::time::Duration;

use clap::Parser;
use config::{Config, DEFAULT_TICK_INTERVAL};
use error::VendingError;
use input::{ChannelSource, InputError, SimulatedCustomer, next_event, spawn_console_reader};
use log::{error, info, warn};
use machine::{VendingEvent, VendingMachine, catalog};
use tokio::{sync::broadcast, time::MissedTickBehavior};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Milliseconds between machine ticks
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL.as_millis() as u64)]
    tick_ms: u64,

    /// Play this many sales with a simulated customer instead of reading the
    /// console
    #[arg(long)]
    simulate: Option<usize>,

    /// Seed for the simulated customer
    #[arg(long, requires = "simulate")]
    seed: Option<u64>,
}

/// Print the progress notices published since the last tick.
fn print_notices(event_rx: &mut broadcast::Receiver<VendingEvent>) {
    loop {
        match event_rx.try_recv() {
            Ok(event) => println!("{}", event),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Notice receiver lagged by {} messages.", n);
            }
            Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed) => {
                break;
            }
        }
    }
}

fn print_menu() {
    println!("Coins:");
    for coin in catalog::DENOMINATIONS {
        println!("  {}  {}", coin.symbol, coin.value);
    }
    println!("Products:");
    for product in catalog::PRODUCTS {
        println!("  {}  {:<10} {}", product.symbol, product.name, product.price);
    }
    println!("Type keys and press enter. Ctrl-C to quit.");
}

#[tokio::main]
async fn main() -> Result<(), VendingError> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config =
        Config { tick_interval: Duration::from_millis(cli.tick_ms.max(1)), ..Default::default() };

    let (event_tx, mut event_rx) = broadcast::channel::<VendingEvent>(config.output_capacity);
    let mut machine = VendingMachine::with_vending_states(event_tx);

    // Start the input adapter
    let (key_tx, mut source) = ChannelSource::channel(config.input_capacity);
    let mut console = match cli.simulate {
        Some(sales) => {
            info!("Simulating {} sales", sales);
            SimulatedCustomer::new(sales, config.key_interval, cli.seed).spawn(key_tx);
            None
        }
        None => {
            print_menu();
            Some(spawn_console_reader(key_tx)?)
        }
    };

    machine.start()?;
    info!("Vending machine ready, ticking every {:?}", config.tick_interval);

    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Interrupt received");
                break;
            }

            _ = ticker.tick() => {
                let event = match next_event(&mut source, &machine) {
                    Ok(event) => event,
                    Err(InputError::Closed) => {
                        info!("Input closed");
                        // the reader has finished; surface a read failure
                        if let Some(reader) = console.take() {
                            reader.join()?;
                        }
                        break;
                    }
                    Err(e) => return Err(e.into()),
                };

                let result = machine.step(event);
                print_notices(&mut event_rx);

                if let Err(e) = result {
                    error!(
                        "!!! Machine halted in state {:?}: {} (context: {:?})",
                        machine.current_state(),
                        e,
                        machine.context()
                    );
                    return Err(e.into());
                }
            }
        }
    }

    println!("shutting down");
    Ok(())
}
