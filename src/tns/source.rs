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

//! Sources a directory can be populated from

use super::error::TnsError;
use super::reader;
use std::path::{Path, PathBuf};

/// Something that yields the raw lines of a connection directory
pub trait LineSource: Send + Sync {
    /// Read all lines, with line terminators removed
    fn read_lines(&self) -> Result<Vec<String>, TnsError>;

    /// Human-readable origin, used in log messages
    fn describe(&self) -> String;
}

/// Directory file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>, TnsError> {
        reader::read_lines(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Directory text held in memory
#[derive(Debug, Clone)]
pub struct StringSource {
    content: String,
}

impl StringSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl LineSource for StringSource {
    fn read_lines(&self) -> Result<Vec<String>, TnsError> {
        Ok(reader::split_lines(&self.content))
    }

    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }
}
