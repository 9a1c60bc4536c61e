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

//! Core data structures for connection descriptors

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Transport protocol of a listener address.
///
/// The directory format only ever carries TCP endpoints, so this is also the
/// value used when an entry omits `PROTOCOL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    #[default]
    Tcp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two identifier styles an entry uses in `CONNECT_DATA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// `SERVICE_NAME = ...`
    ServiceName,
    /// `SID = ...`
    Sid,
}

impl ServiceKind {
    /// Keyword used for this kind inside a descriptor body
    pub fn keyword(&self) -> &'static str {
        match self {
            ServiceKind::ServiceName => "SERVICE_NAME",
            ServiceKind::Sid => "SID",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Logical service reachable at a host/port pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceIdentifier {
    pub value: String,
    pub kind: ServiceKind,
}

impl ServiceIdentifier {
    pub fn service_name(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ServiceKind::ServiceName,
        }
    }

    pub fn sid(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ServiceKind::Sid,
        }
    }
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Optional connection tuning keys carried through from the source text.
///
/// None of these participate in validity; they are kept so consumers can
/// honour them when opening connections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TuningOptions {
    /// `CONNECT_TIMEOUT`; the source may give it in `ms`, `sec` or `min`
    #[serde(
        rename = "connect_timeout_ms",
        serialize_with = "serialize_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub connect_timeout: Option<Duration>,
    /// `TRANSPORT_CONNECT_TIMEOUT`
    #[serde(
        rename = "transport_connect_timeout_ms",
        serialize_with = "serialize_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_connect_timeout: Option<Duration>,
    /// `RETRY_COUNT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
    /// `LOAD_BALANCE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balance: Option<bool>,
    /// `FAILOVER`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover: Option<bool>,
    /// `SERVER` (dedicated/shared/pooled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl TuningOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn serialize_millis<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(duration) => {
            serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
        }
        None => serializer.serialize_none(),
    }
}

/// A fully decoded, valid directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionDescriptor {
    /// Entry name as written in the source
    pub name: String,
    pub host: String,
    pub port: u16,
    pub service: ServiceIdentifier,
    pub protocol: Protocol,
    #[serde(skip_serializing_if = "TuningOptions::is_empty")]
    pub tuning: TuningOptions,
}

impl ConnectionDescriptor {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        service: ServiceIdentifier,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            service,
            protocol: Protocol::default(),
            tuning: TuningOptions::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: TuningOptions) -> Self {
        self.tuning = tuning;
        self
    }

    /// Uppercased name used as the directory key
    pub fn canonical_name(&self) -> String {
        canonical_name(&self.name)
    }
}

impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}:{}/{}",
            self.canonical_name(),
            self.host,
            self.port,
            self.service
        )
    }
}

/// Canonicalize an entry name for use as a directory key
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_canonical_name() {
        let descriptor = ConnectionDescriptor::new(
            "orcl.world",
            "db1.example.com",
            1521,
            ServiceIdentifier::service_name("ORCL"),
        );
        assert_eq!(descriptor.to_string(), "ORCL.WORLD -> db1.example.com:1521/ORCL");
    }

    #[test]
    fn test_protocol_defaults_to_tcp() {
        let descriptor =
            ConnectionDescriptor::new("a", "h", 1, ServiceIdentifier::sid("X"));
        assert_eq!(descriptor.protocol, Protocol::Tcp);
        assert_eq!(descriptor.protocol.to_string(), "TCP");
        assert!(descriptor.tuning.is_empty());
    }

    #[test]
    fn test_service_kind_keyword() {
        assert_eq!(ServiceKind::ServiceName.keyword(), "SERVICE_NAME");
        assert_eq!(ServiceKind::Sid.keyword(), "SID");
    }

    #[test]
    fn test_tuning_timeouts_serialize_as_millis() {
        let tuning = TuningOptions {
            connect_timeout: Some(Duration::from_millis(500)),
            retry_count: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&tuning).unwrap(),
            serde_json::json!({"connect_timeout_ms": 500, "retry_count": 2})
        );
    }
}
