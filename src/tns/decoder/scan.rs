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

//! Keyword scanning helpers for descriptor bodies
//!
//! Matching happens on an ASCII-uppercased copy of the text. Because ASCII
//! uppercasing keeps byte offsets stable, values are sliced out of the
//! original text so their case survives.

use std::time::Duration;

/// One searchable representation of an entry (a line, or the joined entry)
pub(super) struct ScanText<'a> {
    original: &'a str,
    upper: String,
}

impl<'a> ScanText<'a> {
    pub(super) fn new(original: &'a str) -> Self {
        Self {
            original,
            upper: original.to_ascii_uppercase(),
        }
    }

    pub(super) fn contains(&self, keyword: &str) -> bool {
        self.upper.contains(keyword)
    }

    /// Value of the first occurrence of `keyword`: the text after the next
    /// `=` up to the next `)`, trimmed.
    pub(super) fn keyword_value(&self, keyword: &str) -> Option<&'a str> {
        let start = self.upper.find(keyword)?;
        self.value_after(start + keyword.len())
    }

    /// Like [`keyword_value`](Self::keyword_value) but only accepts a
    /// keyword that stands alone as a key: preceded by `(`, whitespace or the
    /// start of the text, and followed by optional whitespace and `=`.
    pub(super) fn bounded_value(&self, keyword: &str) -> Option<&'a str> {
        for (start, _) in self.upper.match_indices(keyword) {
            let preceded_ok = self.upper[..start]
                .chars()
                .next_back()
                .map_or(true, |c| c == '(' || c.is_whitespace());
            if !preceded_ok {
                continue;
            }

            let end = start + keyword.len();
            if !self.upper[end..].trim_start().starts_with('=') {
                continue;
            }

            if let Some(value) = self.value_after(end) {
                return Some(value);
            }
        }
        None
    }

    /// Value of a compact `(PORT=nnnn)` token
    pub(super) fn port_token(&self) -> Option<&'a str> {
        const TOKEN: &str = "(PORT=";
        let start = self.upper.find(TOKEN)? + TOKEN.len();
        let len = self.upper[start..].find(')')?;
        if len == 0 {
            return None;
        }
        Some(self.original[start..start + len].trim())
    }

    fn value_after(&self, from: usize) -> Option<&'a str> {
        let eq = from + self.upper[from..].find('=')?;
        let rest = self.original[eq + 1..].trim_start();
        match rest.find(')') {
            Some(close) if close > 0 => Some(rest[..close].trim()),
            _ => None,
        }
    }
}

/// Parse an `ON/OFF`, `YES/NO` or `TRUE/FALSE` flag
pub(super) fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_uppercase().as_str() {
        "ON" | "YES" | "TRUE" => Some(true),
        "OFF" | "NO" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Parse a plain count such as `RETRY_COUNT = 3`
pub(super) fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Parse a timeout such as `10`, `10 sec`, `500 ms` or `1min`.
///
/// A bare number is seconds. Unknown units yield `None`.
pub(super) fn parse_timeout(value: &str) -> Option<Duration> {
    let value = value.trim();
    let digits = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let amount: u64 = value[..digits].parse().ok()?;

    match value[digits..].trim().to_ascii_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => Some(Duration::from_secs(amount)),
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => {
            Some(Duration::from_millis(amount))
        }
        "min" | "mins" | "minute" | "minutes" => amount.checked_mul(60).map(Duration::from_secs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_value_preserves_case() {
        let text = ScanText::new("(ADDRESS = (PROTOCOL = TCP)(Host = Db1.Example.com)(PORT = 1521))");
        assert_eq!(text.keyword_value("HOST"), Some("Db1.Example.com"));
        assert_eq!(text.keyword_value("PORT"), Some("1521"));
    }

    #[test]
    fn test_keyword_value_requires_closing_paren() {
        assert_eq!(ScanText::new("(HOST = open").keyword_value("HOST"), None);
        assert_eq!(ScanText::new("(HOST = )").keyword_value("HOST"), None);
        assert_eq!(ScanText::new("HOST").keyword_value("HOST"), None);
    }

    #[test]
    fn test_bounded_value_skips_embedded_keywords() {
        let text = ScanText::new("(TRANSPORT_CONNECT_TIMEOUT = 3)(CONNECT_TIMEOUT = 10)");
        assert_eq!(text.bounded_value("CONNECT_TIMEOUT"), Some("10"));
        assert_eq!(text.bounded_value("TRANSPORT_CONNECT_TIMEOUT"), Some("3"));

        let text = ScanText::new("(SERVERS = 4)(SERVER = DEDICATED)");
        assert_eq!(text.bounded_value("SERVER"), Some("DEDICATED"));
    }

    #[test]
    fn test_port_token() {
        assert_eq!(ScanText::new("(host=a)(port=1522)").port_token(), Some("1522"));
        assert_eq!(ScanText::new("(PORT = 1522)").port_token(), None);
        assert_eq!(ScanText::new("(PORT=)").port_token(), None);
    }

    #[test]
    fn test_parse_flag_and_count() {
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_count(" 3 "), Some(3));
        assert_eq!(parse_count("ten"), None);
    }

    #[test]
    fn test_parse_timeout_units() {
        assert_eq!(parse_timeout("10"), Some(Duration::from_secs(10)));
        assert_eq!(parse_timeout("10 sec"), Some(Duration::from_secs(10)));
        assert_eq!(parse_timeout("500 ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_timeout("250MS"), Some(Duration::from_millis(250)));
        assert_eq!(parse_timeout("2 min"), Some(Duration::from_secs(120)));
        assert_eq!(parse_timeout("5 fortnights"), None);
        assert_eq!(parse_timeout("ms"), None);
        assert_eq!(parse_timeout("1.5"), None);
    }
}
