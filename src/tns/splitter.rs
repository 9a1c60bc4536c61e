// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Grouping of filtered lines into raw directory entries

/// Raw source lines of one named entry, in source order
pub type RawEntry = Vec<String>;

/// Whether a line opens a new entry rather than continuing the current one
pub fn starts_entry(line: &str) -> bool {
    match line.chars().next() {
        Some(first) => !matches!(first, ' ' | '\t' | '(' | ')'),
        None => false,
    }
}

/// Partition filtered lines into entries.
///
/// Continuation lines that appear before any entry start are dropped.
pub fn split_entries(lines: Vec<String>) -> Vec<RawEntry> {
    let mut entries = Vec::new();
    let mut current: Option<RawEntry> = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if starts_entry(&line) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(vec![line]);
        } else if let Some(ref mut entry) = current {
            entry.push(line);
        } else {
            tracing::trace!("Dropping continuation line outside any entry: {}", line);
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starts_entry() {
        assert!(starts_entry("TESTDB ="));
        assert!(starts_entry("-- deprecated"));
        assert!(!starts_entry("  (DESCRIPTION ="));
        assert!(!starts_entry("\t(HOST = x)"));
        assert!(!starts_entry("(ADDRESS = )"));
        assert!(!starts_entry(")"));
        assert!(!starts_entry(""));
    }

    #[test]
    fn test_split_multiple_entries() {
        let entries = split_entries(lines(&[
            "A =",
            "  (DESCRIPTION =",
            "  )",
            "B=(DESCRIPTION=(ADDRESS=(HOST=b)))",
            "C =",
            ")",
        ]));
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], lines(&["A =", "  (DESCRIPTION =", "  )"]));
        assert_eq!(entries[1], lines(&["B=(DESCRIPTION=(ADDRESS=(HOST=b)))"]));
        assert_eq!(entries[2], lines(&["C =", ")"]));
    }

    #[test]
    fn test_leading_continuation_lines_are_dropped() {
        let entries = split_entries(lines(&["  (orphan)", "A =", "  (x)"]));
        assert_eq!(entries, vec![lines(&["A =", "  (x)"])]);
    }

    #[test]
    fn test_whitespace_only_line_continues_entry() {
        let entries = split_entries(lines(&["A =", "   ", "  (x)", "B ="]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], lines(&["A =", "   ", "  (x)"]));
    }
}
