//! Player portfolio bookkeeping.
//!
//! Tracks a cash balance, the held positions (with volume-weighted
//! average purchase price), and an append-only activity log with one
//! line per executed trade. The log is the text the Huffman coder
//! sizes on demand.

use crate::market::Market;
use std::collections::HashMap;
use thiserror::Error;

/// A rejected trade. Rejections leave the portfolio untouched.
#[derive(Debug, Error)]
pub enum TradeError {
    /// The purchase costs more than the available balance
    #[error("insufficient funds: need ${needed:.2}, have ${available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    /// Selling more shares than are held (or none at all)
    #[error("insufficient shares of {name}: asked {asked}, holding {held}")]
    InsufficientShares {
        name: String,
        asked: u32,
        held: u32,
    },
}

/// One held position.
#[derive(Debug, Clone, Copy)]
pub struct Holding {
    /// Shares held
    pub quantity: u32,

    /// Volume-weighted average purchase price
    pub avg_price: f64,
}

/// A position joined with its current market price, for display.
#[derive(Debug, Clone)]
pub struct Position {
    pub name: String,
    pub quantity: u32,
    pub avg_price: f64,
    pub current_price: f64,
    /// `(current - avg) * quantity`, rounded to cents
    pub profit: f64,
}

/// The player: cash, positions, and the trade log.
pub struct Player {
    name: String,
    balance: f64,
    holdings: HashMap<String, Holding>,
    activity: Vec<String>,
}

impl Player {
    pub fn new(name: &str, starting_balance: f64) -> Self {
        Self {
            name: name.to_string(),
            balance: starting_balance,
            holdings: HashMap::new(),
            activity: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cash balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The held position for `name`, if any.
    pub fn holding(&self, name: &str) -> Option<&Holding> {
        self.holdings.get(name)
    }

    /// Buy `quantity` shares at `price` each.
    ///
    /// Debits the balance, recomputes the volume-weighted average
    /// price, and appends a log line.
    ///
    /// # Errors
    /// [`TradeError::InsufficientFunds`] if the total cost exceeds the
    /// balance.
    pub fn buy(&mut self, name: &str, price: f64, quantity: u32) -> Result<(), TradeError> {
        let cost = price * f64::from(quantity);
        if cost > self.balance {
            return Err(TradeError::InsufficientFunds {
                needed: cost,
                available: self.balance,
            });
        }

        self.balance -= cost;

        let holding = self.holdings.entry(name.to_string()).or_insert(Holding {
            quantity: 0,
            avg_price: 0.0,
        });
        let old_total = f64::from(holding.quantity) * holding.avg_price;
        holding.quantity += quantity;
        holding.avg_price = (old_total + cost) / f64::from(holding.quantity);

        self.activity
            .push(format!("Bought {quantity}x {name} at ${price:.2}"));
        Ok(())
    }

    /// Sell `quantity` shares at `price` each.
    ///
    /// Credits the proceeds, keeps the average price of the remaining
    /// shares, removes the position at zero, and appends a log line.
    ///
    /// # Errors
    /// [`TradeError::InsufficientShares`] if fewer than `quantity`
    /// shares are held.
    pub fn sell(&mut self, name: &str, price: f64, quantity: u32) -> Result<(), TradeError> {
        let held = self.holdings.get(name).map_or(0, |h| h.quantity);
        if held < quantity {
            return Err(TradeError::InsufficientShares {
                name: name.to_string(),
                asked: quantity,
                held,
            });
        }

        self.balance += price * f64::from(quantity);

        if let Some(holding) = self.holdings.get_mut(name) {
            holding.quantity -= quantity;
            if holding.quantity == 0 {
                self.holdings.remove(name);
            }
        }

        self.activity
            .push(format!("Sold {quantity}x {name} at ${price:.2}"));
        Ok(())
    }

    /// Every position joined with its current price, sorted by name.
    pub fn positions(&self, market: &Market) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .holdings
            .iter()
            .filter_map(|(name, holding)| {
                let current_price = market.stock(name)?.price();
                let profit = round_cents(
                    (current_price - holding.avg_price) * f64::from(holding.quantity),
                );
                Some(Position {
                    name: name.clone(),
                    quantity: holding.quantity,
                    avg_price: holding.avg_price,
                    current_price,
                    profit,
                })
            })
            .collect();

        positions.sort_by(|a, b| a.name.cmp(&b.name));
        positions
    }

    /// Unrealized profit across all positions, rounded to cents.
    pub fn total_profit(&self, market: &Market) -> f64 {
        let total: f64 = self
            .positions(market)
            .iter()
            .map(|position| position.profit)
            .sum();
        round_cents(total)
    }

    /// Number of trades executed so far.
    pub fn trades(&self) -> usize {
        self.activity.len()
    }

    /// The append-only activity log, one line per trade.
    pub fn activity_log(&self) -> String {
        self.activity.join("\n")
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
