//! Market simulator: a randomly evolving set of synthetic instruments.
//!
//! Each stock starts with a random price and a fixed trend. Once per
//! simulated day every price takes a bounded random step, biased by
//! the trend, floored at $1.00, and rounded to cents.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG owned by the
//! market. Given the same seed, the full price history is
//! bit-identical across runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The synthetic instruments every market starts with.
pub const INSTRUMENT_NAMES: [&str; 15] = [
    "TechWave",
    "AgroPlus",
    "BankNow",
    "HealthMax",
    "GreenEnergy",
    "EduSmart",
    "Foodies",
    "TravelNow",
    "BuildIt",
    "FashionX",
    "PetLovers",
    "AutoDrive",
    "MobiPay",
    "BioGen",
    "CloudNet",
];

/// Daily price variation bound (uniform, ±5%).
const DAILY_VARIATION: f64 = 0.05;

/// Extra drift applied by a non-flat trend (±2%).
const TREND_BIAS: f64 = 0.02;

/// Prices never fall below one dollar.
const PRICE_FLOOR: f64 = 1.0;

/// Starting price range in dollars.
const STARTING_PRICE_RANGE: std::ops::RangeInclusive<f64> = 10.0..=100.0;

/// Long-run direction assigned to a stock at market creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Bullish,
    Bearish,
    Flat,
}

impl Trend {
    fn choose(rng: &mut ChaCha8Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => Trend::Bullish,
            1 => Trend::Bearish,
            _ => Trend::Flat,
        }
    }

    fn bias(self) -> f64 {
        match self {
            Trend::Bullish => TREND_BIAS,
            Trend::Bearish => -TREND_BIAS,
            Trend::Flat => 0.0,
        }
    }
}

/// One synthetic instrument with its full price history.
#[derive(Debug, Clone)]
pub struct Stock {
    name: String,
    price: f64,
    trend: Trend,
    history: Vec<f64>,
}

impl Stock {
    fn new(name: &str, price: f64, trend: Trend) -> Self {
        Self {
            name: name.to_string(),
            price,
            trend,
            history: vec![price],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price in dollars, rounded to cents.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Every price this stock has had, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    fn update(&mut self, rng: &mut ChaCha8Rng) {
        let variation = rng.gen_range(-DAILY_VARIATION..=DAILY_VARIATION) + self.trend.bias();
        let stepped = round_cents(self.price * (1.0 + variation));
        self.price = stepped.max(PRICE_FLOOR);
        self.history.push(self.price);
    }
}

/// The market: all instruments plus the day counter.
pub struct Market {
    stocks: Vec<Stock>,
    day: u32,
    rng: ChaCha8Rng,
}

impl Market {
    /// Create a market with the reference instruments and random
    /// starting prices drawn from the seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let stocks = INSTRUMENT_NAMES
            .iter()
            .map(|name| {
                let price = round_cents(rng.gen_range(STARTING_PRICE_RANGE));
                let trend = Trend::choose(&mut rng);
                Stock::new(name, price, trend)
            })
            .collect();

        Self {
            stocks,
            day: 0,
            rng,
        }
    }

    /// Advance the simulation by one day, stepping every price.
    pub fn advance_day(&mut self) {
        self.day += 1;
        let rng = &mut self.rng;
        for stock in &mut self.stocks {
            stock.update(rng);
        }
    }

    /// Days elapsed since market creation.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// `(name, current price)` for every instrument, listing order.
    pub fn list(&self) -> Vec<(&str, f64)> {
        self.stocks
            .iter()
            .map(|stock| (stock.name(), stock.price()))
            .collect()
    }

    /// Look up one instrument by exact name.
    pub fn stock(&self, name: &str) -> Option<&Stock> {
        self.stocks.iter().find(|stock| stock.name() == name)
    }
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
