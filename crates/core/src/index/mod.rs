//! Identifier index - a fixed-bucket hash table mapping game IDs to their
//! current position in the catalog's backing array.
//!
//! The index is a derived projection over the catalog: it is built once
//! after the initial load, extended on insert, and MUST be rebuilt whenever
//! positions shift (i.e. after any delete-by-shift). A stale position
//! silently corrupts future lookups, so [`GameIndex::rebuild`] is the
//! load-bearing call of the whole design.

/// Number of buckets. Collisions are expected and resolved by chaining.
pub const BUCKET_COUNT: usize = 101;

/// One chained entry: a game ID and its catalog array position.
#[derive(Debug, Clone)]
struct IndexEntry {
    key: String,
    position: usize,
}

/// Fixed-bucket hash index from game ID to catalog position.
///
/// Within a bucket the chain is ordered newest-inserted-first. The hash is
/// the byte sum of the key modulo [`BUCKET_COUNT`] - deliberately simple,
/// not cryptographic; the chaining contract is what matters.
#[derive(Debug)]
pub struct GameIndex {
    buckets: Vec<Vec<IndexEntry>>,
    len: usize,
}

impl Default for GameIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl GameIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            len: 0,
        }
    }

    fn bucket_of(key: &str) -> usize {
        let sum: usize = key.bytes().map(|b| b as usize).sum();
        sum % BUCKET_COUNT
    }

    /// Insert a key at the given catalog position.
    ///
    /// Does not check for duplicates - callers pre-verify uniqueness via
    /// [`GameIndex::search`]. The new entry goes to the front of its chain.
    pub fn insert(&mut self, key: &str, position: usize) {
        let bucket = Self::bucket_of(key);
        self.buckets[bucket].insert(
            0,
            IndexEntry {
                key: key.to_string(),
                position,
            },
        );
        self.len += 1;
    }

    /// Look up the catalog position for a key.
    pub fn search(&self, key: &str) -> Option<usize> {
        let bucket = Self::bucket_of(key);
        self.buckets[bucket]
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.position)
    }

    /// Unlink a key from its chain. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let bucket = Self::bucket_of(key);
        let chain = &mut self.buckets[bucket];
        match chain.iter().position(|e| e.key == key) {
            Some(i) => {
                chain.remove(i);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Drop every entry, leaving the buckets empty.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Clear and reinsert every live (key, position) pair.
    ///
    /// Must be called after any operation that shifts catalog positions.
    pub fn rebuild<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        self.clear();
        for (key, position) in entries {
            self.insert(key, position);
        }
    }

    /// Number of indexed keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no keys are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
