//! Search algorithms over instrument listings and text.
//!
//! Three independent strategies behind one dispatch point:
//! - **Sequential**: left-to-right scan, works on unsorted data
//! - **Binary**: halving scan, requires data sorted ascending
//! - **Pattern**: Rabin-Karp rolling-hash substring search
//!
//! # Dispatch
//!
//! [`Query`] is a closed union carrying the operands for each
//! strategy, and [`search`] matches it exhaustively. Free-form
//! discriminators (CLI flags, user input) are parsed into
//! [`Algorithm`] at exactly one boundary; an unrecognized name fails
//! there with [`SearchError::UnknownAlgorithm`], never silently.
//!
//! # Indexing
//!
//! Pattern matches are reported as character offsets (counting
//! `char`s, not bytes), matching how the listings are displayed.
//! Inputs are treated as sequences of single code points; no wider
//! Unicode normalization is attempted.

use crate::error::SearchError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default alphabet radix for the rolling hash.
pub const DEFAULT_RADIX: u64 = 256;

/// Default (small prime) modulus for the rolling hash.
///
/// Deliberately small: hash collisions are expected and every hash
/// match is confirmed character by character before being reported.
pub const DEFAULT_MODULUS: u64 = 101;

/// Which search strategy to run.
///
/// This is the parsed form of a user-facing discriminator. The
/// operands travel separately, in [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Linear scan; no ordering requirement
    Sequential,
    /// Halving scan; requires sorted input
    Binary,
    /// Rolling-hash substring search
    Pattern,
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Algorithm::Sequential),
            "binary" => Ok(Algorithm::Binary),
            "pattern" => Ok(Algorithm::Pattern),
            other => Err(SearchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Sequential => "sequential",
            Algorithm::Binary => "binary",
            Algorithm::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

/// A search request: strategy plus its operands.
///
/// `Sequential` and `Binary` locate a whole element inside a slice;
/// `Pattern` locates a substring inside text using the default
/// [`RabinKarp`] parameters (use [`RabinKarp::find`] directly for
/// custom radix/modulus).
#[derive(Debug, Clone, Copy)]
pub enum Query<'a, T> {
    /// Scan `data` left to right for the first element equal to `target`.
    Sequential { data: &'a [T], target: &'a T },

    /// Halve `data` until `target` is found or the bounds cross.
    ///
    /// Precondition: `data` is sorted ascending. Not checked; see [`binary`].
    Binary { data: &'a [T], target: &'a T },

    /// Find the first occurrence of `pattern` inside `text`.
    Pattern { text: &'a str, pattern: &'a str },
}

impl<T> Query<'_, T> {
    /// The strategy this query dispatches to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Query::Sequential { .. } => Algorithm::Sequential,
            Query::Binary { .. } => Algorithm::Binary,
            Query::Pattern { .. } => Algorithm::Pattern,
        }
    }
}

/// Run a search request.
///
/// # Returns
/// - `Some(index)` of the first match (element index for slice
///   queries, character offset for pattern queries)
/// - `None` if no match exists
pub fn search<T: Ord>(query: Query<'_, T>) -> Option<usize> {
    match query {
        Query::Sequential { data, target } => sequential(data, target),
        Query::Binary { data, target } => binary(data, target),
        Query::Pattern { text, pattern } => RabinKarp::default().find(text, pattern),
    }
}

/// Sequential search: scan `data` left to right.
///
/// Works on unsorted data. O(n).
///
/// # Returns
/// Index of the first element equal to `target`, or `None`.
pub fn sequential<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|item| item == target)
}

/// Binary search: repeatedly halve the candidate range.
///
/// O(log n).
///
/// # Precondition
/// `data` must be sorted ascending under `T`'s ordering. This is NOT
/// checked: on unsorted input the call still terminates and stays in
/// bounds, but the answer may be wrong (an index whose element is not
/// `target` is never returned; a present `target` may be missed).
///
/// # Returns
/// Index of an element equal to `target` (not necessarily the first
/// of several duplicates), or `None`.
pub fn binary<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = data.len() - 1;

    loop {
        let mid = (low + high) / 2;

        match data[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    // target sorts before data[0]
                    return None;
                }
                high = mid - 1;
            }
        }

        if low > high {
            return None;
        }
    }
}

/// Rabin-Karp substring search parameters.
///
/// The polynomial hash treats each window of the text as a base-`radix`
/// number reduced modulo `modulus`. Both values are construction-time
/// constants of the searcher rather than literals buried in the scan.
///
/// With the default small modulus, distinct windows frequently share a
/// hash; the hash is a pre-filter only and candidates are always
/// confirmed character by character.
#[derive(Debug, Clone, Copy)]
pub struct RabinKarp {
    radix: u64,
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self::new(DEFAULT_RADIX, DEFAULT_MODULUS)
    }
}

impl RabinKarp {
    /// Create a searcher with explicit hash parameters.
    ///
    /// # Panics
    /// If `modulus` is zero (the residue class would be undefined).
    pub fn new(radix: u64, modulus: u64) -> Self {
        assert!(modulus > 0, "rolling hash modulus must be non-zero");
        Self { radix, modulus }
    }

    /// Find the first occurrence of `pattern` inside `text`.
    ///
    /// Average O(n + m); degrades toward O(nm) when many windows
    /// collide with the pattern hash.
    ///
    /// # Returns
    /// - `Some(offset)` — character offset of the first match
    /// - `None` — no match, or a degenerate pattern (empty, or longer
    ///   than the text)
    pub fn find(&self, text: &str, pattern: &str) -> Option<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();

        let n = text.len();
        let m = pattern.len();
        if m == 0 || m > n {
            return None;
        }

        let d = self.radix;
        let q = self.modulus;

        // h = d^(m-1) mod q, the weight of the outgoing character
        let mut h = 1u64;
        for _ in 0..m - 1 {
            h = (h * d) % q;
        }

        // Hash the pattern and the first window of the text
        let mut p = 0u64;
        let mut t = 0u64;
        for i in 0..m {
            p = (d * p + code(pattern[i])) % q;
            t = (d * t + code(text[i])) % q;
        }

        // Slide the window across the text
        for s in 0..=n - m {
            // Hash equality is only a candidate; confirm before reporting
            if p == t && text[s..s + m] == pattern[..] {
                return Some(s);
            }

            if s < n - m {
                // Remove the outgoing character, add the incoming one.
                // Adding q before subtracting keeps the intermediate
                // value in the non-negative residue class.
                let outgoing = (code(text[s]) * h) % q;
                t = (d * ((t + q - outgoing) % q) + code(text[s + m])) % q;
            }
        }

        None
    }
}

/// Character code used by the rolling hash.
fn code(c: char) -> u64 {
    c as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["TechWave", "AgroPlus", "BankNow", "HealthMax", "GreenEnergy"];

    #[test]
    fn test_sequential_found() {
        assert_eq!(sequential(&NAMES, &"BankNow"), Some(2));
    }

    #[test]
    fn test_sequential_not_found() {
        assert_eq!(sequential(&NAMES, &"Nonexistent"), None);
    }

    #[test]
    fn test_sequential_first_of_duplicates() {
        let data = [3, 1, 4, 1, 5];
        assert_eq!(sequential(&data, &1), Some(1));
    }

    #[test]
    fn test_binary_found() {
        let data = [10, 20, 30, 40, 50];
        assert_eq!(binary(&data, &30), Some(2));
        assert_eq!(binary(&data, &10), Some(0));
        assert_eq!(binary(&data, &50), Some(4));
    }

    #[test]
    fn test_binary_not_found() {
        let data = [10, 20, 30, 40, 50];
        assert_eq!(binary(&data, &35), None);
        assert_eq!(binary(&data, &5), None);
        assert_eq!(binary(&data, &55), None);
    }

    #[test]
    fn test_binary_empty_and_single() {
        let empty: [i32; 0] = [];
        assert_eq!(binary(&empty, &1), None);
        assert_eq!(binary(&[7], &7), Some(0));
        assert_eq!(binary(&[7], &6), None);
        assert_eq!(binary(&[7], &8), None);
    }

    #[test]
    fn test_pattern_basic() {
        let rk = RabinKarp::default();
        assert_eq!(rk.find("hello world", "world"), Some(6));
        assert_eq!(rk.find("hello world", "hello"), Some(0));
        assert_eq!(rk.find("hello world", "xyz"), None);
    }

    #[test]
    fn test_pattern_first_match_wins() {
        let rk = RabinKarp::default();
        assert_eq!(rk.find("abcabcabc", "abc"), Some(0));
        assert_eq!(rk.find("xabcabc", "abc"), Some(1));
    }

    #[test]
    fn test_pattern_degenerate() {
        let rk = RabinKarp::default();
        // Empty pattern and pattern longer than text are "no match"
        assert_eq!(rk.find("abc", ""), None);
        assert_eq!(rk.find("ab", "abc"), None);
        assert_eq!(rk.find("", ""), None);
    }

    #[test]
    fn test_pattern_whole_text() {
        let rk = RabinKarp::default();
        assert_eq!(rk.find("abc", "abc"), Some(0));
    }

    #[test]
    fn test_pattern_repeated_characters() {
        // Adversarial for the rolling update: every window hashes alike
        let rk = RabinKarp::default();
        assert_eq!(rk.find("aaaaaaaaab", "aab"), Some(7));
        assert_eq!(rk.find("aaaa", "aa"), Some(0));
        assert_eq!(rk.find("aaaa", "ab"), None);
    }

    #[test]
    fn test_pattern_multibyte_offsets_count_chars() {
        let rk = RabinKarp::default();
        // 'é' is one char but two bytes; offsets count chars
        assert_eq!(rk.find("café au lait", "au"), Some(5));
    }

    #[test]
    fn test_pattern_custom_parameters() {
        // A different small prime still finds the same matches
        let rk = RabinKarp::new(256, 13);
        assert_eq!(rk.find("the quick brown fox", "brown"), Some(10));
        assert_eq!(rk.find("the quick brown fox", "crown"), None);
    }

    #[test]
    fn test_dispatch_exhaustive() {
        let data = [10, 20, 30];
        assert_eq!(search(Query::Sequential { data: &data, target: &20 }), Some(1));
        assert_eq!(search(Query::Binary { data: &data, target: &30 }), Some(2));
        assert_eq!(
            search::<i32>(Query::Pattern { text: "abcdef", pattern: "cde" }),
            Some(2)
        );
    }

    #[test]
    fn test_query_reports_algorithm() {
        let data = [1];
        let q = Query::Sequential { data: &data, target: &1 };
        assert_eq!(q.algorithm(), Algorithm::Sequential);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("sequential".parse::<Algorithm>().unwrap(), Algorithm::Sequential);
        assert_eq!("binary".parse::<Algorithm>().unwrap(), Algorithm::Binary);
        assert_eq!("pattern".parse::<Algorithm>().unwrap(), Algorithm::Pattern);
    }

    #[test]
    fn test_algorithm_parse_unknown() {
        let err = "bogosearch".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, SearchError::UnknownAlgorithm(ref name) if name == "bogosearch"));
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for algo in [Algorithm::Sequential, Algorithm::Binary, Algorithm::Pattern] {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }
}
