//! Per-search-task transposition table.
//!
//! Each root search task owns one table; nothing is shared or locked across
//! threads. Entries are keyed by the full zobrist key and hold the score
//! computed at a given remaining depth. A probe only answers when the
//! stored entry was searched at least as deep as the caller needs, and a
//! store never overwrites a deeper entry with a shallower one.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub depth: u8,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TableEntry>,
    stats: TableStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        TranspositionTable::default()
    }

    /// The stored score for `key`, provided it was computed at `depth` or
    /// deeper.
    pub fn probe(&mut self, key: u64, depth: u8) -> Option<i32> {
        self.stats.probes += 1;
        match self.entries.get(&key) {
            Some(entry) if entry.depth >= depth => {
                self.stats.hits += 1;
                Some(entry.score)
            }
            _ => None,
        }
    }

    pub fn store(&mut self, key: u64, depth: u8, score: i32) {
        self.stats.stores += 1;
        self.entries
            .entry(key)
            .and_modify(|existing| {
                if depth >= existing.depth {
                    *existing = TableEntry { depth, score };
                }
            })
            .or_insert(TableEntry { depth, score });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        self.stats
    }
}
