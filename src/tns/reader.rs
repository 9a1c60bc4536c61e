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

//! Line reading and noise filtering for directory files

use super::error::TnsError;
use std::io::ErrorKind;
use std::path::Path;

/// Marker that starts a full-line comment
const COMMENT_MARKER: char = '#';

/// Read a directory file into lines with their terminators removed.
///
/// Leading whitespace is kept because the entry splitter relies on it.
pub fn read_lines(path: &Path) -> Result<Vec<String>, TnsError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TnsError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => TnsError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    Ok(split_lines(&content))
}

/// Split text into lines, dropping `\n` and `\r\n` terminators only
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Drop zero-length lines and lines starting with `#`.
///
/// A line made only of whitespace is neither, so it survives and later acts
/// as a continuation line.
pub fn remove_noise(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_split_lines_strips_terminators_only() {
        let lines = split_lines("A =\r\n  (HOST = x)  \n\tB\n");
        assert_eq!(lines, vec!["A =", "  (HOST = x)  ", "\tB"]);
    }

    #[test]
    fn test_remove_noise() {
        let lines = vec![
            "# comment".to_string(),
            String::new(),
            "NAME =".to_string(),
            "  # indented hash is not a comment".to_string(),
            "   ".to_string(),
        ];
        let filtered = remove_noise(lines);
        assert_eq!(
            filtered,
            vec!["NAME =", "  # indented hash is not a comment", "   "]
        );
    }

    #[test]
    fn test_read_lines_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"# header\nTESTDB =\n  (DESCRIPTION = )\n")
            .unwrap();
        file.flush().unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["# header", "TESTDB =", "  (DESCRIPTION = )"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tnsnames.ora");
        let err = read_lines(&path).unwrap_err();
        assert_eq!(err, TnsError::SourceNotFound { path });
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x54, 0x4e, 0x53, 0xff, 0xfe, 0x0a]).unwrap();
        file.flush().unwrap();

        let err = read_lines(file.path()).unwrap_err();
        assert!(matches!(err, TnsError::SourceUnreadable { .. }));
    }
}
