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

//! Connection directory parsing and resolution
//!
//! Reads `tnsnames.ora` style files: a list of named entries, each starting
//! at column 0 with `NAME = (...)` or `NAME=(...)` and continuing on lines
//! that start with whitespace or a parenthesis. Loading runs four stages:
//!
//! 1. read lines from a [`LineSource`] (`reader`)
//! 2. drop blank lines and `#` comments (`reader`)
//! 3. group lines into raw entries (`splitter`)
//! 4. decode each entry into a [`ConnectionDescriptor`] (`decoder`)
//!
//! The result is held by a [`Directory`], keyed by uppercased entry name.

mod decoder;
mod directory;
mod error;
mod reader;
mod render;
mod source;
mod splitter;
mod types;

pub use decoder::{decode_entry, extract_name};
pub use directory::{build_connections, ConnectionMap, Directory};
pub use error::{MissingField, TnsError};
pub use reader::{read_lines, remove_noise, split_lines};
pub use render::CONNECTION_SCHEME;
pub use source::{FileSource, LineSource, StringSource};
pub use splitter::{split_entries, starts_entry, RawEntry};
pub use types::{
    canonical_name, ConnectionDescriptor, Protocol, ServiceIdentifier, ServiceKind, TuningOptions,
};
