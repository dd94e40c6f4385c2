//! tradesim: headless driver for the trading simulation.
//!
//! Runs the day loop end to end: advance the market, filter and
//! search the listing, execute a scripted trade, record it in the
//! recency registries, evaluate the challenge ladder, and finish with
//! a portfolio report and a Huffman size estimate of the activity
//! log.

mod challenge;
mod config;
mod market;
mod player;
mod stats;

use crate::challenge::{default_challenges, Status};
use crate::config::SimConfig;
use crate::market::{Market, Trend};
use crate::player::Player;
use crate::stats::SessionStats;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tradesim_core::huffman;
use tradesim_core::registry::{RecentBuys, RecentSales};
use tradesim_core::search::{search, Algorithm, Query, RabinKarp};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match SimConfig::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    run(&config);
}

fn run(config: &SimConfig) {
    let mut market = Market::new(config.seed);
    let mut player = Player::new("Investor", config.starting_balance);
    let mut buys = RecentBuys::with_capacity(config.buys_capacity);
    let mut sales = RecentSales::with_capacity(config.sales_capacity);
    let mut stats = SessionStats::new();

    // Trading decisions draw from their own stream so the market walk
    // stays identical whether or not the script changes.
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1));

    let mut challenges = default_challenges();
    let mut current_challenge = 0;
    if let Some(first) = challenges.get_mut(0) {
        first.start();
    }

    println!("tradesim: {} days, seed {}", config.days, config.seed);
    println!();

    for _ in 0..config.days {
        market.advance_day();
        stats.days_run += 1;

        let listing = market.list();

        // The market screen's substring filter, headless
        let visible: Vec<(&str, f64)> = match &config.filter {
            Some(filter) => {
                let rk = RabinKarp::default();
                stats.searches_run += listing.len() as u64;
                listing
                    .iter()
                    .copied()
                    .filter(|(name, _)| rk.find(name, filter).is_some())
                    .collect()
            }
            None => listing.clone(),
        };

        let watch_note = locate_watched(config, &market, &mut stats);
        let trade_note = trade(
            &market,
            &visible,
            &mut player,
            &mut buys,
            &mut sales,
            &mut stats,
            &mut rng,
        );

        println!("Day {:>2}: {watch_note} | {trade_note}", market.day());

        if let Some(challenge) = challenges.get_mut(current_challenge) {
            challenge.advance_day();
            let status = challenge.evaluate(player.total_profit(&market), player.balance());
            if matches!(status, Status::Completed | Status::Failed) {
                let verdict = if status == Status::Completed {
                    "completed"
                } else {
                    "failed"
                };
                println!("        challenge {verdict}: {}", challenge.description());
                current_challenge += 1;
                if let Some(next) = challenges.get_mut(current_challenge) {
                    next.start();
                }
            }
        }
    }

    if let Some(open) = challenges.get(current_challenge) {
        if open.is_active() {
            println!("        challenge still open: {}", open.description());
        }
    }

    println!();
    report(config, &market, &player, &buys, &sales, &mut stats);
}

/// Locate the watched instrument with the configured algorithm and
/// describe the outcome.
fn locate_watched(config: &SimConfig, market: &Market, stats: &mut SessionStats) -> String {
    stats.searches_run += 1;

    let names: Vec<String> = market
        .list()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();

    match config.search {
        Algorithm::Pattern => {
            let line = names.join(" ");
            match search::<String>(Query::Pattern {
                text: &line,
                pattern: &config.watch,
            }) {
                Some(offset) => format!("{:?} matches the listing at offset {offset}", config.watch),
                None => format!("{:?} not in the listing", config.watch),
            }
        }
        Algorithm::Sequential => {
            let found = search(Query::Sequential {
                data: &names,
                target: &config.watch,
            });
            describe_lookup(found, &names, market, &config.watch)
        }
        Algorithm::Binary => {
            let mut sorted = names.clone();
            sorted.sort();
            let found = search(Query::Binary {
                data: &sorted,
                target: &config.watch,
            });
            describe_lookup(found, &sorted, market, &config.watch)
        }
    }
}

fn describe_lookup(
    found: Option<usize>,
    names: &[String],
    market: &Market,
    watch: &str,
) -> String {
    match found {
        Some(index) => {
            let name = &names[index];
            match market.stock(name) {
                Some(stock) => format!("{name} ${:.2}", stock.price()),
                None => name.to_string(),
            }
        }
        None => format!("{watch} not listed"),
    }
}

/// One scripted trade per day: usually buy something visible,
/// occasionally sell a held position.
fn trade(
    market: &Market,
    visible: &[(&str, f64)],
    player: &mut Player,
    buys: &mut RecentBuys,
    sales: &mut RecentSales,
    stats: &mut SessionStats,
    rng: &mut ChaCha8Rng,
) -> String {
    let held = player.positions(market);
    if !held.is_empty() && rng.gen_bool(0.3) {
        let position = &held[rng.gen_range(0..held.len())];
        let price = position.current_price;
        return match player.sell(&position.name, price, 1) {
            Ok(()) => {
                stats.sells_executed += 1;
                if let Err(err) = sales.insert(&position.name) {
                    stats.registry_overflows += 1;
                    eprintln!("warning: recently-sold registry: {err}");
                }
                format!("sold 1x {} at ${price:.2}", position.name)
            }
            Err(err) => {
                stats.trades_rejected += 1;
                format!("sell rejected: {err}")
            }
        };
    }

    if visible.is_empty() {
        return "no instruments visible".to_string();
    }

    let (name, price) = visible[rng.gen_range(0..visible.len())];
    let quantity = rng.gen_range(1..=3);
    match player.buy(name, price, quantity) {
        Ok(()) => {
            stats.buys_executed += 1;
            if let Err(err) = buys.insert(name, price) {
                stats.registry_overflows += 1;
                eprintln!("warning: recently-bought registry: {err}");
            }
            format!("bought {quantity}x {name} at ${price:.2}")
        }
        Err(err) => {
            stats.trades_rejected += 1;
            format!("buy rejected: {err}")
        }
    }
}

fn report(
    config: &SimConfig,
    market: &Market,
    player: &Player,
    buys: &RecentBuys,
    sales: &RecentSales,
    stats: &mut SessionStats,
) {
    println!("=== Market (day {}) ===", market.day());
    for (name, price) in market.list() {
        let (trend, since_start) = match market.stock(name) {
            Some(stock) => {
                let start = stock.history().first().copied().unwrap_or(price);
                let trend = match stock.trend() {
                    Trend::Bullish => "up",
                    Trend::Bearish => "down",
                    Trend::Flat => "flat",
                };
                (trend, price - start)
            }
            None => ("flat", 0.0),
        };
        let held = player.holding(name).map_or(0, |h| h.quantity);
        println!("{name:<12} ${price:>8.2}  {trend:<5} {since_start:>+8.2} since day 0   held: {held}");
    }
    println!();

    println!("=== Portfolio ({}) ===", player.name());
    println!("Balance: ${:.2}", player.balance());
    println!("Trades executed: {}", player.trades());
    for position in player.positions(market) {
        println!(
            "{:<12} {:>3} shares | avg ${:>7.2} | now ${:>7.2} | profit ${:>8.2}",
            position.name, position.quantity, position.avg_price, position.current_price,
            position.profit
        );
    }
    println!("Total profit: ${:.2}", player.total_profit(market));
    println!();

    println!("=== Recently Bought ===");
    if buys.is_empty() {
        println!("(empty)");
    }
    for (name, price) in buys.all_items() {
        println!("{name:<12} ${price:>8.2}");
    }
    println!();

    println!("=== Recently Sold ===");
    if sales.is_empty() {
        println!("(empty)");
    }
    for name in sales.get_all() {
        println!("{name}");
    }
    println!();

    let log = player.activity_log();
    if !log.is_empty() {
        match huffman::compress(&log) {
            Ok(compressed) => {
                stats.log_bytes = compressed.original_bytes();
                stats.compressed_bytes = compressed.compressed_bytes();
                stats.compressed_bits = compressed.bit_len();
            }
            Err(err) => eprintln!("warning: log compression failed: {err}"),
        }
    }

    if config.print_summary {
        stats.print_summary();
    }
}
