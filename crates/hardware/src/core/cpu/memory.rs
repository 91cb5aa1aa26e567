//! Sparse word memory.
//!
//! Memory is a lazily populated map from effective address to a 32-bit word.
//! Addresses are whatever the executor computes (base + signed offset); there
//! is no alignment or bounds checking and no byte addressing within a word.

use std::collections::BTreeMap;

/// Sparse, word-granular memory keyed by effective address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    words: BTreeMap<i64, u32>,
}

impl Memory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Reads the word at `addr`.
    ///
    /// An unmapped address reads as 0 and is mapped as a side effect, which is
    /// what a `lw` does.
    pub fn read_word(&mut self, addr: i64) -> u32 {
        *self.words.entry(addr).or_insert(0)
    }

    /// Returns the word at `addr` without mapping it.
    pub fn peek(&self, addr: i64) -> Option<u32> {
        self.words.get(&addr).copied()
    }

    /// Creates or overwrites the word at `addr`.
    pub fn write_word(&mut self, addr: i64, val: u32) {
        let _ = self.words.insert(addr, val);
    }

    /// Unmaps every address.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Number of mapped addresses.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no address has been mapped.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates mapped words in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.words.iter().map(|(&addr, &val)| (addr, val))
    }
}
