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

//! Error types for reading and decoding connection directories

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Required descriptor field that an entry failed to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Host,
    Port,
    ServiceIdentifier,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissingField::Name => "name",
            MissingField::Host => "host",
            MissingField::Port => "port",
            MissingField::ServiceIdentifier => "service identifier",
        };
        f.write_str(label)
    }
}

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while loading a connection directory
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TnsError {
    /// The directory file does not exist
    #[error("connection directory not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// The directory file exists but could not be read or decoded
    #[error("failed to read connection directory '{}': {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// A single entry could not be turned into a descriptor
    #[error("unparseable entry '{name}': missing {}", join_fields(.missing))]
    Unparseable {
        name: String,
        missing: Vec<MissingField>,
    },

    /// A descriptor could not be rendered into a connection string
    #[error("cannot render connection string for '{name}': {reason}")]
    Render { name: String, reason: String },
}
