//! Client-side search over a loaded listing.

use crate::entry::Entry;

/// Entries whose name contains `query`, ignoring case.
///
/// The query is trimmed first; a blank query keeps every entry. Order is
/// preserved.
pub fn filter(entries: &[Entry], query: &str) -> Vec<Entry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::file("1", "Report.pdf"),
            Entry::file("2", "report_final.docx"),
            Entry::file("3", "image.png"),
        ]
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = filter(&sample(), "report");
        assert_eq!(names(&result), ["Report.pdf", "report_final.docx"]);
    }

    #[test]
    fn test_query_is_trimmed_and_lowered() {
        let result = filter(&sample(), "  IMAGE ");
        assert_eq!(names(&result), ["image.png"]);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let entries = sample();
        assert_eq!(filter(&entries, ""), entries);
        assert_eq!(filter(&entries, " \t "), entries);
    }

    #[test]
    fn test_idempotent() {
        let entries = sample();
        for query in ["report", "PNG", "", "zzz", "."] {
            let once = filter(&entries, query);
            assert_eq!(filter(&once, query), once, "query {query:?}");
        }
    }

    #[test]
    fn test_no_match_and_empty_input() {
        assert!(filter(&sample(), "spreadsheet").is_empty());
        assert!(filter(&[], "report").is_empty());
    }
}
