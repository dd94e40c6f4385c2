//! Configuration for the tradesim application.
//!
//! Handles parsing command-line arguments and generating sensible
//! defaults.
//!
//! # Philosophy
//!
//! The simulation should work with ZERO arguments. All randomness
//! flows from one seed, printed with the configuration, so any run is
//! reproducible with `--seed`.

use tradesim_core::registry::{DEFAULT_BUYS_CAPACITY, DEFAULT_SALES_CAPACITY};
use tradesim_core::search::Algorithm;

/// Complete configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    // === Simulation ===
    /// Number of trading days to run
    pub days: u32,

    /// Random seed for the market walk and the trading script
    pub seed: u64,

    /// Player starting balance in dollars
    pub starting_balance: f64,

    // === Search ===
    /// Algorithm used to locate the watched instrument each day
    pub search: Algorithm,

    /// Instrument name the day loop looks up
    pub watch: String,

    /// Substring filter applied to the market listing (None = show all)
    pub filter: Option<String>,

    // === Registries ===
    /// Capacity of the recently-bought registry
    pub buys_capacity: usize,

    /// Capacity of the recently-sold registry
    pub sales_capacity: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the session summary at the end
    pub print_summary: bool,
}

impl SimConfig {
    /// Parse configuration from command-line arguments.
    ///
    /// If `--seed` is not provided, a time-based seed is used (and
    /// printed, so the run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut days: Option<u32> = None;
        let mut seed: Option<u64> = None;
        let mut starting_balance: Option<f64> = None;
        let mut search: Option<Algorithm> = None;
        let mut watch: Option<String> = None;
        let mut filter: Option<String> = None;
        let mut buys_capacity: Option<usize> = None;
        let mut sales_capacity: Option<usize> = None;
        let mut print_config = false;
        let mut print_summary = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--days" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--days requires a number".to_string());
                    }
                    days = Some(args[i].parse().map_err(|_| "invalid days")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--balance" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--balance requires a number".to_string());
                    }
                    starting_balance = Some(args[i].parse().map_err(|_| "invalid balance")?);
                }
                "--search" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--search requires an algorithm name".to_string());
                    }
                    // The one place a free-form discriminator is parsed
                    search = Some(args[i].parse().map_err(|e| format!("{e}"))?);
                }
                "--watch" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--watch requires an instrument name".to_string());
                    }
                    watch = Some(args[i].clone());
                }
                "--filter" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--filter requires a substring".to_string());
                    }
                    filter = Some(args[i].clone());
                }
                "--buys-capacity" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--buys-capacity requires a number".to_string());
                    }
                    buys_capacity = Some(args[i].parse().map_err(|_| "invalid buys-capacity")?);
                }
                "--sales-capacity" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sales-capacity requires a number".to_string());
                    }
                    sales_capacity = Some(args[i].parse().map_err(|_| "invalid sales-capacity")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-summary" => {
                    print_summary = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(SimConfig {
            days: days.unwrap_or(10),
            seed,
            starting_balance: starting_balance.unwrap_or(1000.0),
            search: search.unwrap_or(Algorithm::Binary),
            watch: watch.unwrap_or_else(|| "TechWave".to_string()),
            filter,
            buys_capacity: buys_capacity.unwrap_or(DEFAULT_BUYS_CAPACITY),
            sales_capacity: sales_capacity.unwrap_or(DEFAULT_SALES_CAPACITY),
            print_config,
            print_summary,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Days: {}", self.days);
        println!("Seed: {}", self.seed);
        println!("Starting balance: ${:.2}", self.starting_balance);
        println!();
        println!("Search algorithm: {}", self.search);
        println!("Watched instrument: {}", self.watch);
        match &self.filter {
            Some(filter) => println!("Listing filter: {:?}", filter),
            None => println!("Listing filter: (none)"),
        }
        println!();
        println!("Recently-bought capacity: {}", self.buys_capacity);
        println!("Recently-sold capacity: {}", self.sales_capacity);
        println!();
    }
}

fn print_help() {
    println!("tradesim: educational stock-trading simulation");
    println!();
    println!("USAGE:");
    println!("    tradesim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --days <N>              Trading days to simulate (default: 10)");
    println!("    --seed <N>              Random seed for determinism (default: time-based)");
    println!("    --balance <DOLLARS>     Starting balance (default: 1000.00)");
    println!();
    println!("    --search <ALGO>         Lookup algorithm: sequential, binary, pattern");
    println!("                            (default: binary)");
    println!("    --watch <NAME>          Instrument to locate each day (default: TechWave)");
    println!("    --filter <SUBSTR>       Only list instruments whose name contains SUBSTR");
    println!();
    println!("    --buys-capacity <N>     Recently-bought registry slots (default: 101)");
    println!("    --sales-capacity <N>    Recently-sold registry slots (default: 20)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --no-summary            Don't print the session summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    tradesim                          # Run with time-based seed");
    println!("    tradesim --seed 42 --days 20      # Deterministic 20-day run");
    println!("    tradesim --search pattern --watch Tech");
    println!("    tradesim --filter Now             # Only BankNow, TravelNow, ...");
    println!();
}
