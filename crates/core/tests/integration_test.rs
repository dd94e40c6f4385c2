//! Integration tests for the toolkit.
//!
//! Property-style checks across the public API: algorithm agreement on
//! randomized inputs, brute-force cross-checks for the pattern
//! matcher, registry round-trips, Huffman losslessness, and the
//! concrete scenarios the simulation relies on.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tradesim_core::huffman;
use tradesim_core::registry::{RecentBuys, RecentSales};
use tradesim_core::search::{binary, sequential, search, Query, RabinKarp};

/// First-match reference implementation for the pattern matcher.
fn brute_force_find(text: &str, pattern: &str) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    (0..=text.len() - pattern.len()).find(|&s| text[s..s + pattern.len()] == pattern[..])
}

/// On sorted data, binary and sequential agree: both miss, or both
/// return an index holding the target. Indices may differ when the
/// target repeats, so element equality is asserted, not index equality.
#[test]
fn test_sequential_binary_equivalence() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(0..40);
        let mut data: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
        data.sort();

        let target: i64 = rng.gen_range(-60..60);

        let seq = sequential(&data, &target);
        let bin = binary(&data, &target);

        match (seq, bin) {
            (None, None) => {}
            (Some(i), Some(j)) => {
                assert_eq!(data[i], target);
                assert_eq!(data[j], target);
            }
            other => panic!("algorithms disagree on {data:?} / {target}: {other:?}"),
        }
    }
}

/// Randomized cross-check of the rolling-hash matcher against the
/// brute-force reference. A small alphabet forces repeats and hash
/// collisions under the small default modulus.
#[test]
fn test_pattern_matches_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let alphabet = ['a', 'b', 'c'];
    let rk = RabinKarp::default();

    for _ in 0..300 {
        let text_len = rng.gen_range(1..60);
        let text: String = (0..text_len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        let pattern_len = rng.gen_range(1..=6.min(text_len));
        let pattern: String = if rng.gen_bool(0.5) {
            // Guaranteed present: lift a window straight out of the text
            let chars: Vec<char> = text.chars().collect();
            let start = rng.gen_range(0..=chars.len() - pattern_len);
            chars[start..start + pattern_len].iter().collect()
        } else {
            (0..pattern_len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect()
        };

        assert_eq!(
            rk.find(&text, &pattern),
            brute_force_find(&text, &pattern),
            "mismatch for text {text:?}, pattern {pattern:?}"
        );
    }
}

/// Degenerate hash collisions: every window of a one-symbol text
/// hashes identically, so the matcher leans entirely on the
/// confirmation pass.
#[test]
fn test_pattern_adversarial_repeats() {
    let rk = RabinKarp::default();

    let text = "a".repeat(200);
    assert_eq!(rk.find(&text, "aaaa"), Some(0));
    assert_eq!(rk.find(&text, &"a".repeat(200)), Some(0));
    assert_eq!(rk.find(&text, "aab"), None);

    let mut almost = "a".repeat(100);
    almost.push('b');
    assert_eq!(rk.find(&almost, "ab"), Some(99));
    assert_eq!(brute_force_find(&almost, "ab"), Some(99));
}

/// The scenario the market screen runs: locating an instrument name
/// inside a listing headline. Offsets count characters, so the
/// accented 'á' earlier in the sentence shifts nothing.
#[test]
fn test_pattern_market_headline() {
    let text = "O mercado financeiro está em alta com a TechWave liderando.";
    let rk = RabinKarp::default();

    assert_eq!(rk.find(text, "TechWave"), Some(40));
    assert_eq!(rk.find(text, "Nonexistent"), None);
    assert_eq!(
        search::<String>(Query::Pattern { text, pattern: "TechWave" }),
        Some(40)
    );
}

/// Round-trip through the buy registry at the reference capacity.
#[test]
fn test_buys_registry_reference_scenario() {
    let mut buys = RecentBuys::with_capacity(101);
    buys.insert("TechWave", 42.50).unwrap();
    buys.insert("AgroPlus", 10.00).unwrap();

    let items = buys.all_items();
    assert_eq!(items.len(), 2);
    assert!(items.contains(&("TechWave", 42.50)));
    assert!(items.contains(&("AgroPlus", 10.00)));
}

/// Inserting up to capacity - 1 random keys: every pair remains
/// retrievable, and re-inserting a key replaces its value without
/// changing occupancy.
#[test]
fn test_buys_registry_randomized_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let mut buys = RecentBuys::with_capacity(101);

    let mut keys = Vec::new();
    for i in 0..100 {
        // Distinct keys by construction
        let key = format!("Stock{i:03}");
        let price = (rng.gen_range(100..10_000) as f64) / 100.0;
        buys.insert(&key, price).unwrap();
        keys.push((key, price));
    }

    assert_eq!(buys.len(), 100);
    let items = buys.all_items();
    for (key, price) in &keys {
        assert!(items.contains(&(key.as_str(), *price)), "missing {key}");
    }

    // Overwrite every key; occupancy must not move
    for (key, _) in &keys {
        buys.insert(key, 1.23).unwrap();
    }
    assert_eq!(buys.len(), 100);
    assert!(buys.all_items().iter().all(|(_, p)| *p == 1.23));
}

/// Set semantics of the sales registry: duplicate inserts leave the
/// listing unchanged.
#[test]
fn test_sales_registry_idempotence() {
    let mut sales = RecentSales::new();
    for _ in 0..3 {
        sales.insert("TechWave").unwrap();
        sales.insert("AgroPlus").unwrap();
    }

    let all = sales.get_all();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&"TechWave"));
    assert!(all.contains(&"AgroPlus"));
}

/// Losslessness on randomized texts over a skewed alphabet, plus the
/// size accounting the caller displays.
#[test]
fn test_huffman_losslessness_randomized() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    // Heavily skewed draw so most texts compress below byte parity
    let alphabet = ['e', 'e', 'e', 'e', 't', 't', 'a', 'o', 'i', ' '];

    for _ in 0..100 {
        let len = rng.gen_range(1..300);
        let text: String = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        let compressed = huffman::compress(&text).unwrap();
        let decoded = huffman::decode(compressed.bits(), compressed.codes()).unwrap();
        assert_eq!(decoded, text);

        assert_eq!(
            compressed.compressed_bytes(),
            (compressed.bit_len() + 7) / 8
        );
        if text.chars().count() > 8 {
            assert!(
                compressed.compressed_bytes() <= compressed.original_bytes(),
                "skewed text grew: {text:?}"
            );
        }
    }
}

/// A single distinct symbol still sizes correctly: one bit per
/// occurrence, rounded up to whole bytes.
#[test]
fn test_huffman_single_symbol_sizing() {
    for len in [1usize, 7, 8, 9, 1000] {
        let text = "X".repeat(len);
        let compressed = huffman::compress(&text).unwrap();

        assert_eq!(compressed.bit_len(), len);
        assert_eq!(compressed.compressed_bytes(), (len + 7) / 8);
        assert_eq!(
            huffman::decode(compressed.bits(), compressed.codes()).unwrap(),
            text
        );
    }
}

/// The services compose the way the simulation uses them: trade,
/// record, log, then size the log.
#[test]
fn test_day_loop_composition() {
    let listing = ["AgroPlus", "BankNow", "CloudNet", "TechWave"];
    let mut buys = RecentBuys::new();
    let mut sales = RecentSales::new();
    let mut log = String::new();

    // Locate the instrument to trade (listing is sorted)
    let idx = search(Query::Binary {
        data: &listing,
        target: &"TechWave",
    })
    .expect("TechWave is listed");
    assert_eq!(listing[idx], "TechWave");

    buys.insert(listing[idx], 42.50).unwrap();
    log.push_str("Bought 1x TechWave at $42.50\n");

    sales.insert("AgroPlus").unwrap();
    log.push_str("Sold 2x AgroPlus at $10.00\n");

    let compressed = huffman::compress(&log).unwrap();
    assert!(compressed.compressed_bytes() < compressed.original_bytes());
    assert_eq!(
        huffman::decode(compressed.bits(), compressed.codes()).unwrap(),
        log
    );

    assert_eq!(buys.len(), 1);
    assert_eq!(sales.get_all(), vec!["AgroPlus"]);
}
