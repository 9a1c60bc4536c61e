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

//! Rendering descriptors back into connection strings

use super::error::TnsError;
use super::types::{ConnectionDescriptor, ServiceKind};
use std::time::Duration;
use url::Url;

/// URL scheme understood by the Python `oracledb` SQLAlchemy dialect
pub const CONNECTION_SCHEME: &str = "oracle+oracledb";

impl ConnectionDescriptor {
    /// Driver DSN for this descriptor.
    ///
    /// Service names use the easy-connect `host:port/service` form. SIDs
    /// cannot be expressed that way, so they get the full descriptor.
    pub fn to_dsn(&self) -> String {
        match self.service.kind {
            ServiceKind::ServiceName => {
                format!("{}:{}/{}", self.host, self.port, self.service.value)
            }
            ServiceKind::Sid => self.to_descriptor_string(),
        }
    }

    /// Full `(DESCRIPTION=...)` form, including any tuning keys
    pub fn to_descriptor_string(&self) -> String {
        let mut out = String::from("(DESCRIPTION=");

        let tuning = &self.tuning;
        if let Some(limit) = tuning.connect_timeout {
            out.push_str(&format!("(CONNECT_TIMEOUT={})", timeout_value(limit)));
        }
        if let Some(limit) = tuning.transport_connect_timeout {
            out.push_str(&format!("(TRANSPORT_CONNECT_TIMEOUT={})", timeout_value(limit)));
        }
        if let Some(count) = tuning.retry_count {
            out.push_str(&format!("(RETRY_COUNT={count})"));
        }
        if let Some(flag) = tuning.load_balance {
            out.push_str(&format!("(LOAD_BALANCE={})", on_off(flag)));
        }
        if let Some(flag) = tuning.failover {
            out.push_str(&format!("(FAILOVER={})", on_off(flag)));
        }

        out.push_str(&format!(
            "(ADDRESS=(PROTOCOL={})(HOST={})(PORT={}))",
            self.protocol, self.host, self.port
        ));

        out.push_str("(CONNECT_DATA=");
        if let Some(server) = &tuning.server {
            out.push_str(&format!("(SERVER={server})"));
        }
        out.push_str(&format!(
            "({}={})))",
            self.service.kind.keyword(),
            self.service.value
        ));

        out
    }

    /// SQLAlchemy-style connection URL with credentials embedded.
    ///
    /// Credentials are percent-encoded. Service names go into the
    /// `service_name` query parameter, SIDs into the path.
    pub fn to_connection_string(&self, username: &str, password: &str) -> Result<String, TnsError> {
        let render_error = |reason: String| TnsError::Render {
            name: self.name.clone(),
            reason,
        };

        let base = format!("{CONNECTION_SCHEME}://{}:{}/", self.host, self.port);
        let mut url = Url::parse(&base).map_err(|e| render_error(e.to_string()))?;

        url.set_username(username)
            .map_err(|_| render_error("URL cannot carry a username".to_string()))?;
        url.set_password(Some(password))
            .map_err(|_| render_error("URL cannot carry a password".to_string()))?;

        match self.service.kind {
            ServiceKind::ServiceName => {
                url.query_pairs_mut()
                    .append_pair("service_name", &self.service.value);
            }
            ServiceKind::Sid => url.set_path(&format!("/{}", self.service.value)),
        }

        Ok(url.into())
    }
}

/// Whole seconds are written bare, anything finer in milliseconds
fn timeout_value(limit: Duration) -> String {
    if limit.subsec_nanos() == 0 {
        limit.as_secs().to_string()
    } else {
        format!("{} ms", limit.as_millis())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}
