// src/core/index.rs
use crate::core::normalize::anagram_key;
use crate::core::types::{GroupId, RunStats, WordGroup};
use std::collections::HashMap;

/// The in-memory anagram index. Groups live in a `Vec` in creation order and
/// are addressed by `GroupId`; a map from normalized key to id gives O(1)
/// lookup. The index only ever grows: words are appended to their group and
/// nothing is removed.
pub struct AnagramIndex {
    key_to_group: HashMap<String, GroupId>,
    groups: Vec<WordGroup>,
    stats: RunStats,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self {
            key_to_group: HashMap::new(),
            groups: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Gets or creates the group for a normalized key, returning its id.
    fn get_or_create_group(&mut self, key: String) -> GroupId {
        if let Some(&id) = self.key_to_group.get(&key) {
            id
        } else {
            let id = self.groups.len();
            self.groups.push(WordGroup {
                key: key.clone(),
                words: Vec::new(),
            });
            self.key_to_group.insert(key, id);
            self.stats.group_count += 1;
            id
        }
    }

    /// Indexes one word: normalizes it, appends it to its group and updates
    /// the counters. The largest-group tracker moves only on a strict size
    /// increase, so the first group to reach a given size wins ties.
    pub fn insert(&mut self, word: &str) {
        let id = self.get_or_create_group(anagram_key(word));
        self.groups[id].words.push(word.to_string());
        self.stats.total_words += 1;

        let size = self.groups[id].words.len();
        if size > self.stats.largest_size {
            self.stats.largest_size = size;
            self.stats.largest_group = Some(id);
        }
    }

    /// Looks up the group a word belongs to, normalizing the query the same
    /// way the loader did. Read-only; a miss changes nothing.
    pub fn lookup(&self, word: &str) -> Option<&WordGroup> {
        self.key_to_group
            .get(&anagram_key(word))
            .map(|&id| &self.groups[id])
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn largest_group(&self) -> Option<&WordGroup> {
        self.stats.largest_group.map(|id| &self.groups[id])
    }

    /// All groups in creation order.
    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for AnagramIndex {
    fn default() -> Self {
        Self::new()
    }
}
