// src/core/types.rs

/// A unique identifier for an anagram group, indexing into the group store.
pub type GroupId = usize;

/// One anagram group: the normalized key and every original word inserted
/// under it. Words keep their insertion order and duplicates are kept;
/// a group is a multiset, not a set.
#[derive(Debug, Clone)]
pub struct WordGroup {
    /// Sorted-character key shared by all members. Shown only in the report.
    pub key: String,
    pub words: Vec<String>,
}

/// Counters accumulated while the index is built. Finalized once the input
/// is exhausted; the query phase never touches them.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Every word handed to the index, duplicates included.
    pub total_words: u64,
    /// Number of distinct normalized keys seen so far.
    pub group_count: usize,
    /// Group currently holding the maximum size, if anything was indexed.
    /// The first group to reach a given size keeps this slot on ties.
    pub largest_group: Option<GroupId>,
    pub largest_size: usize,
}
