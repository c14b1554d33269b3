// File: src/report.rs
use crate::core::index::AnagramIndex;
use std::fmt::Write;

/// Renders the end-of-run summary: word and group totals, the largest
/// group's key and size, and its full membership. Pure function of the
/// index so the exact output can be asserted in tests; the binary just
/// prints the returned string.
pub fn render(index: &AnagramIndex) -> String {
    let stats = index.stats();
    let mut out = String::new();

    let _ = writeln!(out, "REPORT:");
    let _ = writeln!(out);
    let _ = writeln!(out, "Words indexed        : {}", stats.total_words);
    let _ = writeln!(out, "Distinct groups      : {}", stats.group_count);

    if let Some(largest) = index.largest_group() {
        // The key is the sorted-character form, not a member word.
        let _ = writeln!(out, "Largest group (key)  : {}", largest.key);
        let _ = writeln!(out, "Largest group size   : {}", stats.largest_size);
        let _ = writeln!(out, "Members of the largest group:");
        for word in &largest.words {
            let _ = writeln!(out, "  {}", word);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::core::index::AnagramIndex;

    #[test]
    fn report_lists_totals_and_largest_group_members() {
        let mut index = AnagramIndex::new();
        for word in ["cat", "act", "tac", "dog"] {
            index.insert(word);
        }
        let report = render(&index);
        assert!(report.contains("Words indexed        : 4"));
        assert!(report.contains("Distinct groups      : 2"));
        assert!(report.contains("Largest group (key)  : act"));
        assert!(report.contains("Largest group size   : 3"));
        let tail = report.split("Members of the largest group:").nth(1).unwrap();
        assert_eq!(tail, "\n  cat\n  act\n  tac\n");
    }

    #[test]
    fn empty_index_reports_zero_counts_without_a_membership_section() {
        let report = render(&AnagramIndex::new());
        assert!(report.contains("Words indexed        : 0"));
        assert!(report.contains("Distinct groups      : 0"));
        assert!(!report.contains("Members of the largest group:"));
    }
}
