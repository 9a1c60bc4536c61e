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

//! Environment-driven configuration for the connection manager

use crate::utils::path::expand_tilde;
use std::fmt;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Conventional file name inside `TNS_ADMIN` and `$ORACLE_HOME/network/admin`
pub const TNSNAMES_FILE: &str = "tnsnames.ora";

/// Settings for a [`ConnectionManager`](super::ConnectionManager)
#[derive(Clone, Default)]
pub struct ManagerConfig {
    /// Directory file to read; `None` leaves the directory empty
    pub tnsnames_path: Option<PathBuf>,
    pub username: Option<String>,
    pub password: Option<Zeroizing<String>>,
    /// Client library directory handed to downstream drivers
    pub client_path: Option<PathBuf>,
    /// Ask downstream consumers to echo SQL statements
    pub enable_sql_log: bool,
    /// Ask downstream consumers to enable session tracing
    pub enable_trace: bool,
}

impl ManagerConfig {
    /// Create a configuration for a given directory file and no credentials
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            tnsnames_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(Zeroizing::new(password.into()));
        self
    }

    /// Create a configuration from environment variables
    ///
    /// - `TNS_NAMES_PATH`, else `$TNS_ADMIN/tnsnames.ora`, else
    ///   `$ORACLE_HOME/network/admin/tnsnames.ora`
    /// - `ORACLE_USERNAME`, `ORACLE_PASSWORD`
    /// - `CLIENT_PATH`
    /// - `ORACLE_ENABLE_SQL_ALCHEMY_LOG`, `ORACLE_ENABLE_TRACE`
    pub fn from_env() -> Self {
        Self {
            tnsnames_path: tnsnames_path_from_env(),
            username: non_empty_var("ORACLE_USERNAME"),
            password: non_empty_var("ORACLE_PASSWORD").map(Zeroizing::new),
            client_path: non_empty_var("CLIENT_PATH").map(PathBuf::from),
            enable_sql_log: env_flag("ORACLE_ENABLE_SQL_ALCHEMY_LOG"),
            enable_trace: env_flag("ORACLE_ENABLE_TRACE"),
        }
    }

    /// Username and password, when both are configured
    pub fn login(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

impl fmt::Debug for ManagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerConfig")
            .field("tnsnames_path", &self.tnsnames_path)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("client_path", &self.client_path)
            .field("enable_sql_log", &self.enable_sql_log)
            .field("enable_trace", &self.enable_trace)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn tnsnames_path_from_env() -> Option<PathBuf> {
    if let Some(path) = non_empty_var("TNS_NAMES_PATH") {
        return Some(expand_tilde(Path::new(&path)));
    }

    if let Some(admin) = non_empty_var("TNS_ADMIN") {
        return Some(expand_tilde(Path::new(&admin)).join(TNSNAMES_FILE));
    }

    non_empty_var("ORACLE_HOME").map(|home| {
        expand_tilde(Path::new(&home))
            .join("network")
            .join("admin")
            .join(TNSNAMES_FILE)
    })
}
