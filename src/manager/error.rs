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

//! Errors raised by the connection manager

use crate::tns::TnsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    /// The requested name is not in the directory
    #[error("database '{name}' not found. Available: {}", .available.join(", "))]
    UnknownDatabase {
        name: String,
        available: Vec<String>,
    },

    /// A connection string was requested without credentials configured
    #[error("credentials not found. Please set ORACLE_USERNAME and ORACLE_PASSWORD in environment variables")]
    MissingCredentials,

    #[error(transparent)]
    Directory(#[from] TnsError),
}
