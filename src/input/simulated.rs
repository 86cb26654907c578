use std::time::Duration;

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    input::InputError,
    machine::catalog::{DENOMINATIONS, PRODUCTS},
};

/// Chance that a customer presses the product key after the first coin,
/// before paying enough.
const EARLY_SELECTION_PROBABILITY: f64 = 0.25;

/// A customer that plays a fixed number of sales with random products and
/// coins.
#[derive(Debug)]
pub struct SimulatedCustomer {
    rng: StdRng,
    sales: usize,
    key_interval: Duration,
}

impl SimulatedCustomer {
    /// Create a customer. Without a seed the sales differ on every run.
    pub fn new(sales: usize, key_interval: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng, sales, key_interval }
    }

    /// Keys for one sale: coins until the price is covered, then the product
    /// key. Sometimes the product key is also pressed too early.
    pub fn plan_sale(&mut self) -> Vec<char> {
        let product = PRODUCTS[self.rng.random_range(0..PRODUCTS.len())];
        let mut keys = Vec::new();
        let mut deposited = 0;
        let mut selected_early = false;

        while deposited < product.price {
            let coin = DENOMINATIONS[self.rng.random_range(0..DENOMINATIONS.len())];
            keys.push(coin.symbol);
            deposited += coin.value;

            if !selected_early
                && deposited < product.price
                && self.rng.random_bool(EARLY_SELECTION_PROBABILITY)
            {
                keys.push(product.symbol);
                selected_early = true;
            }
        }
        keys.push(product.symbol);

        debug!("Simulated sale of {} with {} deposited: {:?}", product.name, deposited, keys);
        keys
    }

    /// Type every sale into `sender`, one key per interval, then close it.
    pub async fn run(mut self, sender: mpsc::Sender<char>) -> Result<(), InputError> {
        for sale in 1..=self.sales {
            info!("Simulated customer starting sale {} of {}", sale, self.sales);
            for key in self.plan_sale() {
                tokio::time::sleep(self.key_interval).await;
                sender.send(key).await.map_err(|_| InputError::Closed)?;
            }
        }
        // let the last sale finish before the channel closes
        tokio::time::sleep(self.key_interval).await;
        Ok(())
    }

    pub fn spawn(self, sender: mpsc::Sender<char>) -> JoinHandle<Result<(), InputError>> {
        tokio::spawn(self.run(sender))
    }
}
