// File: src/loader.rs
use crate::core::index::AnagramIndex;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::Path;

/// Which whitespace-delimited tokens of the input get indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPolicy {
    /// Index every token.
    All,
    /// Index only the second token of each pair. Compatibility mode: it
    /// reproduces a legacy read loop that pulled two tokens per iteration
    /// and discarded the first, so only every other word was indexed. A
    /// trailing unpaired token is dropped.
    AlternateOnly,
}

/// Builds an index from any buffered reader. Tokens are split on
/// whitespace; there is no further parsing, punctuation stays attached to
/// its word. Empty input yields an empty index.
pub fn index_from_reader<R: BufRead>(
    reader: R,
    policy: TokenPolicy,
) -> Result<AnagramIndex, Error> {
    let mut index = AnagramIndex::new();
    let mut keep = policy == TokenPolicy::All;
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            if keep {
                index.insert(token);
            }
            if policy == TokenPolicy::AlternateOnly {
                keep = !keep;
            }
        }
    }
    Ok(index)
}

/// Opens a word-list file and builds the index from it. An unopenable path
/// surfaces the `io::Error` to the caller.
pub fn index_from_path(path: &Path, policy: TokenPolicy) -> Result<AnagramIndex, Error> {
    let file = File::open(path)?;
    index_from_reader(BufReader::new(file), policy)
}

#[cfg(test)]
mod tests {
    use super::{index_from_reader, TokenPolicy};
    use std::io::Cursor;

    #[test]
    fn indexes_every_token() {
        let index =
            index_from_reader(Cursor::new("cat act tac dog"), TokenPolicy::All).unwrap();
        assert_eq!(index.stats().total_words, 4);
        assert_eq!(index.stats().group_count, 2);
        assert_eq!(index.lookup("tac").unwrap().words, ["cat", "act", "tac"]);
        assert_eq!(index.stats().largest_size, 3);
    }

    #[test]
    fn tokens_split_across_lines_and_runs_of_whitespace() {
        let input = "cat\tact\n\n  tac dog\n";
        let index = index_from_reader(Cursor::new(input), TokenPolicy::All).unwrap();
        assert_eq!(index.stats().total_words, 4);
        assert_eq!(index.lookup("cat").unwrap().words.len(), 3);
    }

    #[test]
    fn alternate_only_skips_every_other_token() {
        let index =
            index_from_reader(Cursor::new("cat act tac dog"), TokenPolicy::AlternateOnly)
                .unwrap();
        assert_eq!(index.stats().total_words, 2);
        assert_eq!(index.stats().group_count, 2);
        assert_eq!(index.lookup("act").unwrap().words, ["act"]);
        assert_eq!(index.lookup("dog").unwrap().words, ["dog"]);
        assert!(index.lookup("cat").unwrap().words.contains(&"act".into()));
    }

    #[test]
    fn alternate_only_drops_a_trailing_unpaired_token() {
        let index = index_from_reader(Cursor::new("a b c"), TokenPolicy::AlternateOnly).unwrap();
        assert_eq!(index.stats().total_words, 1);
        assert!(index.lookup("b").is_some());
        assert!(index.lookup("c").is_none());
    }

    #[test]
    fn empty_input_builds_an_empty_index() {
        let index = index_from_reader(Cursor::new(""), TokenPolicy::All).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.stats().total_words, 0);
        assert_eq!(index.stats().group_count, 0);
    }
}
