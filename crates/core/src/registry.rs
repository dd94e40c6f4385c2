//! Bounded recency registries backed by open-addressed hash tables.
//!
//! The simulation records "recently bought" and "recently sold"
//! instruments in two small fixed-capacity tables that differ only in
//! hash function and payload. Both are implemented over one private
//! probe table parameterized by capacity, hash function, and payload
//! type.
//!
//! # Slot model
//!
//! A slot is either `Empty` or `Occupied(key, payload)`. There is no
//! tombstone state: the registries are insert-and-overwrite only, and
//! never shrink. Collisions resolve by linear probing (+1 with
//! wraparound). An insert probes at most `capacity` slots; a full
//! table with a new key is reported as
//! [`RegistryError::TableFull`], never an unbounded loop and never a
//! silent drop.
//!
//! # Listing order
//!
//! Listings are produced in slot order, not insertion order. Callers
//! display them directly, so that order is part of the contract.
//!
//! # Thread Safety
//!
//! Not thread-safe; callers must serialize access to an instance.

use crate::error::RegistryError;

/// Default capacity of the recently-bought registry.
pub const DEFAULT_BUYS_CAPACITY: usize = 101;

/// Default capacity of the recently-sold registry.
pub const DEFAULT_SALES_CAPACITY: usize = 20;

/// An occupied slot: a key and its payload.
#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// Fixed-capacity open-addressed table with linear probing.
///
/// Generic over the payload (`()` for key-only registries) and
/// parameterized by a hash function at construction.
#[derive(Debug)]
struct ProbeTable<V> {
    slots: Vec<Option<Entry<V>>>,
    hash: fn(&str, usize) -> usize,
    occupied: usize,
}

impl<V> ProbeTable<V> {
    /// Create a table with `capacity` slots and the given hash function.
    ///
    /// # Panics
    /// If `capacity` is zero (the hash has no slot to map into).
    fn new(capacity: usize, hash: fn(&str, usize) -> usize) -> Self {
        assert!(capacity > 0, "registry capacity must be non-zero");

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            slots,
            hash,
            occupied: 0,
        }
    }

    /// Insert `key` with `value`, overwriting in place if the key is
    /// already present.
    ///
    /// Probes linearly from the hashed slot, at most `capacity` steps.
    ///
    /// # Errors
    /// [`RegistryError::TableFull`] if every slot is occupied by a
    /// different key.
    fn insert(&mut self, key: &str, value: V) -> Result<(), RegistryError> {
        let capacity = self.slots.len();
        let start = (self.hash)(key, capacity);

        for probe in 0..capacity {
            let idx = (start + probe) % capacity;
            match &mut self.slots[idx] {
                slot @ None => {
                    *slot = Some(Entry {
                        key: key.to_string(),
                        value,
                    });
                    self.occupied += 1;
                    return Ok(());
                }
                Some(entry) if entry.key == key => {
                    entry.value = value;
                    return Ok(());
                }
                Some(_) => continue,
            }
        }

        Err(RegistryError::TableFull { capacity })
    }

    /// Occupied slots in slot order.
    fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    fn len(&self) -> usize {
        self.occupied
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Hash a key by its first and last character codes.
///
/// Single-character keys use the same character twice; the empty key
/// maps to slot 0.
fn extraction_hash(key: &str, capacity: usize) -> usize {
    let first = key.chars().next().map_or(0, |c| c as usize);
    let last = key.chars().last().map_or(0, |c| c as usize);
    (first + last) % capacity
}

/// Hash a key by the sum of all its character codes.
fn char_sum_hash(key: &str, capacity: usize) -> usize {
    key.chars().map(|c| c as usize).sum::<usize>() % capacity
}

/// Registry of recently bought instruments with their purchase price.
///
/// Keys hash by first+last character code; re-inserting a key updates
/// its price in place.
#[derive(Debug)]
pub struct RecentBuys {
    table: ProbeTable<f64>,
}

impl RecentBuys {
    /// Create a registry with the default capacity (101 slots).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUYS_CAPACITY)
    }

    /// Create a registry with an explicit capacity.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: ProbeTable::new(capacity, extraction_hash),
        }
    }

    /// Record `name` at `price`, overwriting a previous price.
    ///
    /// # Errors
    /// [`RegistryError::TableFull`] if the registry holds `capacity`
    /// other keys.
    pub fn insert(&mut self, name: &str, price: f64) -> Result<(), RegistryError> {
        self.table.insert(name, price)
    }

    /// Every recorded `(name, price)` pair, in slot order.
    pub fn all_items(&self) -> Vec<(&str, f64)> {
        self.table.iter().map(|(name, price)| (name, *price)).collect()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}

impl Default for RecentBuys {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of recently sold instrument names.
///
/// Keys hash by the sum of their character codes; inserting a name
/// already present is a no-op (set semantics).
#[derive(Debug)]
pub struct RecentSales {
    table: ProbeTable<()>,
}

impl RecentSales {
    /// Create a registry with the default capacity (20 slots).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SALES_CAPACITY)
    }

    /// Create a registry with an explicit capacity.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: ProbeTable::new(capacity, char_sum_hash),
        }
    }

    /// Record `name`. Idempotent for names already present.
    ///
    /// # Errors
    /// [`RegistryError::TableFull`] if the registry holds `capacity`
    /// other names.
    pub fn insert(&mut self, name: &str) -> Result<(), RegistryError> {
        self.table.insert(name, ())
    }

    /// Every recorded name, in slot order.
    pub fn get_all(&self) -> Vec<&str> {
        self.table.iter().map(|(name, _)| name).collect()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}

impl Default for RecentSales {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_hash_first_plus_last() {
        // 'A' = 65, 'B' = 66 -> 131 % 5 = 1
        assert_eq!(extraction_hash("AB", 5), 1);
        // Single-character key uses the same char twice: 65 + 65 = 130 % 7 = 4
        assert_eq!(extraction_hash("A", 7), 4);
        // Empty key maps to slot 0
        assert_eq!(extraction_hash("", 5), 0);
    }

    #[test]
    fn test_char_sum_hash() {
        // 'a' = 97, 'b' = 98 -> 195 % 10 = 5
        assert_eq!(char_sum_hash("ab", 10), 5);
        assert_eq!(char_sum_hash("", 10), 0);
    }

    #[test]
    fn test_buys_round_trip() {
        let mut buys = RecentBuys::new();
        buys.insert("TechWave", 42.50).unwrap();
        buys.insert("AgroPlus", 10.00).unwrap();

        let items = buys.all_items();
        assert_eq!(items.len(), 2);
        assert!(items.contains(&("TechWave", 42.50)));
        assert!(items.contains(&("AgroPlus", 10.00)));
    }

    #[test]
    fn test_buys_overwrite_in_place() {
        let mut buys = RecentBuys::new();
        buys.insert("TechWave", 42.50).unwrap();
        buys.insert("TechWave", 45.10).unwrap();

        assert_eq!(buys.len(), 1);
        assert_eq!(buys.all_items(), vec![("TechWave", 45.10)]);
    }

    #[test]
    fn test_collision_probes_to_next_slot() {
        // "AB" and "BA" share the extraction hash (65+66 in both
        // orders); the second insert must land in the next slot.
        let mut buys = RecentBuys::with_capacity(5);
        buys.insert("AB", 1.0).unwrap();
        buys.insert("BA", 2.0).unwrap();

        assert_eq!(buys.len(), 2);
        // Slot order: "AB" hashed to 1, "BA" probed into 2
        assert_eq!(buys.all_items(), vec![("AB", 1.0), ("BA", 2.0)]);
    }

    #[test]
    fn test_probe_wraps_around() {
        let mut buys = RecentBuys::with_capacity(3);
        buys.insert("D", 1.0).unwrap(); // (68+68) % 3 = 1
        buys.insert("HDD", 2.0).unwrap(); // (72+68) % 3 = 2
        buys.insert("DZD", 3.0).unwrap(); // hashes to 1, probes 2, wraps to 0
        assert_eq!(buys.len(), 3);

        let names: Vec<&str> = buys.all_items().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["DZD", "D", "HDD"]);
    }

    #[test]
    fn test_table_full_is_reported() {
        let mut buys = RecentBuys::with_capacity(2);
        buys.insert("AA", 1.0).unwrap();
        buys.insert("BB", 2.0).unwrap();

        let err = buys.insert("CC", 3.0).unwrap_err();
        assert!(matches!(err, RegistryError::TableFull { capacity: 2 }));

        // A present key still updates when the table is full
        buys.insert("AA", 9.0).unwrap();
        assert_eq!(buys.len(), 2);
    }

    #[test]
    fn test_sales_idempotent_insert() {
        let mut sales = RecentSales::new();
        sales.insert("TechWave").unwrap();
        sales.insert("TechWave").unwrap();

        assert_eq!(sales.len(), 1);
        assert_eq!(sales.get_all(), vec!["TechWave"]);
    }

    #[test]
    fn test_sales_full_is_reported_not_dropped() {
        let mut sales = RecentSales::with_capacity(2);
        sales.insert("a").unwrap();
        sales.insert("b").unwrap();

        let err = sales.insert("c").unwrap_err();
        assert!(matches!(err, RegistryError::TableFull { capacity: 2 }));
        assert_eq!(sales.len(), 2);
    }

    #[test]
    fn test_listing_is_slot_order_not_insertion_order() {
        let mut sales = RecentSales::with_capacity(11);
        // 'b' = 98 % 11 = 10; 'a' = 97 % 11 = 9. Inserted b first,
        // listed a first.
        sales.insert("b").unwrap();
        sales.insert("a").unwrap();
        assert_eq!(sales.get_all(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_registry() {
        let buys = RecentBuys::new();
        assert!(buys.is_empty());
        assert_eq!(buys.all_items(), Vec::<(&str, f64)>::new());
        assert_eq!(buys.capacity(), DEFAULT_BUYS_CAPACITY);

        let sales = RecentSales::new();
        assert!(sales.is_empty());
        assert_eq!(sales.capacity(), DEFAULT_SALES_CAPACITY);
    }
}
