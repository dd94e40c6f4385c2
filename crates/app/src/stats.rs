//! Session statistics for the simulation run.
//!
//! A plain struct of counters with explicit updates at each stage of
//! the day loop, printed as a human-readable summary at the end.
//!
//! # Thread Safety
//!
//! Not thread-safe; the simulation is single-threaded and owns one
//! instance.

/// Counters accumulated across one simulation session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    // === Simulation ===
    /// Days simulated
    pub days_run: u32,

    // === Trading ===
    /// Buy orders that executed
    pub buys_executed: u64,

    /// Sell orders that executed
    pub sells_executed: u64,

    /// Orders rejected (insufficient funds or shares)
    pub trades_rejected: u64,

    // === Services ===
    /// Search calls issued (lookups plus listing filters)
    pub searches_run: u64,

    /// Registry inserts refused because the table was full
    pub registry_overflows: u64,

    // === Log compression ===
    /// Activity log size in bytes
    pub log_bytes: usize,

    /// Huffman-coded log size in whole bytes
    pub compressed_bytes: usize,

    /// Huffman-coded log size in bits
    pub compressed_bits: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compressed-to-original ratio of the activity log.
    pub fn compression_ratio(&self) -> f64 {
        if self.log_bytes == 0 {
            0.0
        } else {
            self.compressed_bytes as f64 / self.log_bytes as f64
        }
    }

    /// Print the session summary.
    pub fn print_summary(&self) {
        println!("=== Session Summary ===");
        println!("Days simulated: {}", self.days_run);
        println!();
        println!("Buys executed:  {}", self.buys_executed);
        println!("Sells executed: {}", self.sells_executed);
        println!("Trades rejected: {}", self.trades_rejected);
        println!();
        println!("Searches run: {}", self.searches_run);
        println!("Registry overflows: {}", self.registry_overflows);
        println!();
        if self.log_bytes > 0 {
            println!("Activity log: {} bytes", self.log_bytes);
            println!(
                "Huffman estimate: {} bytes ({} bits)",
                self.compressed_bytes, self.compressed_bits
            );
            println!(
                "Compression ratio: {:.1}%",
                self.compression_ratio() * 100.0
            );
        } else {
            println!("Activity log: empty (no trades executed)");
        }
        println!();
    }
}
