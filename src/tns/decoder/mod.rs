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

//! Entry decoding
//!
//! Turns the raw lines of one entry into a [`ConnectionDescriptor`]. Fields
//! are found by keyword search instead of a structural grammar, because real
//! directory files mix single-line and multi-line layouts, uneven spacing and
//! stray comments. Every keyword is searched in each individual line and then
//! in the whole entry joined into one string, so a value is found whether it
//! sits on one line or is split across continuation lines.

mod scan;


use super::error::{MissingField, TnsError};
use super::types::{ConnectionDescriptor, ServiceIdentifier, TuningOptions};
use scan::{parse_count, parse_flag, parse_timeout, ScanText};
use std::num::IntErrorKind;
use std::time::Duration;
use tracing::{debug, warn};

/// Prefix of dash comments that slip through as entry starts
const DASH_COMMENT: &str = "--";

/// Decode one raw entry.
///
/// Returns [`TnsError::Unparseable`] listing the missing fields when the entry
/// has no usable name, host, port or service identifier.
pub fn decode_entry(entry: &[String]) -> Result<ConnectionDescriptor, TnsError> {
    let first_line = entry.first().map(String::as_str).unwrap_or_default();

    let name = extract_name(first_line).ok_or_else(|| TnsError::Unparseable {
        name: first_line.trim().to_string(),
        missing: vec![MissingField::Name],
    })?;

    let joined = entry.join(" ");
    let texts: Vec<ScanText<'_>> = entry
        .iter()
        .map(|line| ScanText::new(line))
        .chain(std::iter::once(ScanText::new(&joined)))
        .collect();

    let mut fields = RequiredFields::default();
    for text in &texts {
        fields.absorb(text);
    }

    let tuning = scan_tuning(&texts);

    match fields {
        RequiredFields {
            host: Some(host),
            port: Some(port),
            service: Some(service),
        } => Ok(ConnectionDescriptor::new(name, host, port, service).with_tuning(tuning)),
        fields => Err(TnsError::Unparseable {
            name,
            missing: fields.missing(),
        }),
    }
}

/// Extract the entry name from the first line of an entry.
///
/// Handles both `NAME = (...)` and `NAME=(...)`. Returns `None` for dash
/// comments and empty names.
pub fn extract_name(first_line: &str) -> Option<String> {
    if first_line.trim().starts_with(DASH_COMMENT) {
        return None;
    }

    let name = match first_line.find(" =") {
        Some(index) if index > 1 => first_line[..index].trim(),
        _ => {
            let token = first_line.split_whitespace().next()?;
            if token.contains('=') && !token.ends_with('=') {
                token.split('=').next().unwrap_or_default().trim()
            } else {
                token
            }
        }
    };

    if name.is_empty() || name.starts_with(DASH_COMMENT) {
        return None;
    }

    Some(name.to_string())
}

/// Required fields collected so far; the first match of each wins
#[derive(Debug, Default)]
struct RequiredFields {
    host: Option<String>,
    port: Option<u16>,
    service: Option<ServiceIdentifier>,
}

impl RequiredFields {
    fn absorb(&mut self, text: &ScanText<'_>) {
        if self.host.is_none() {
            self.host = text.keyword_value("HOST").map(str::to_string);
        }

        // TRANSPORT_CONNECT_TIMEOUT and friends contain PORT
        if self.port.is_none() && !text.contains("TRANSPORT") {
            self.port = text.keyword_value("PORT").and_then(parse_port);
        }

        if self.port.is_none() {
            self.port = text.port_token().and_then(parse_port);
        }

        if self.service.is_none() {
            self.service = text
                .keyword_value("SERVICE_NAME")
                .map(ServiceIdentifier::service_name);
        }

        // Lines naming a SERVICE belong to SERVICE_NAME
        if self.service.is_none() && !text.contains("SERVICE") {
            self.service = text.keyword_value("SID").map(ServiceIdentifier::sid);
        }
    }

    fn missing(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.host.is_none() {
            missing.push(MissingField::Host);
        }
        if self.port.is_none() {
            missing.push(MissingField::Port);
        }
        if self.service.is_none() {
            missing.push(MissingField::ServiceIdentifier);
        }
        missing
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    match validate_port(raw) {
        Ok(port) => Some(port),
        Err(reason) => {
            warn!("Ignoring port '{}': {}", raw, reason);
            None
        }
    }
}

fn validate_port(raw: &str) -> Result<u16, String> {
    match raw.parse::<u16>() {
        Ok(0) => Err("port 0 is not a usable listener port".to_string()),
        Ok(port) => Ok(port),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err("out of range, ports go up to 65535".to_string())
        }
        Err(e) => Err(format!("not a number ({e})")),
    }
}

fn first_bounded<'a>(texts: &[ScanText<'a>], keyword: &str) -> Option<&'a str> {
    texts.iter().find_map(|text| text.bounded_value(keyword))
}

fn tuning_count(texts: &[ScanText<'_>], keyword: &str) -> Option<u32> {
    let raw = first_bounded(texts, keyword)?;
    let value = parse_count(raw);
    if value.is_none() {
        debug!("Ignoring non-numeric {} value: {}", keyword, raw);
    }
    value
}

fn tuning_timeout(texts: &[ScanText<'_>], keyword: &str) -> Option<Duration> {
    let raw = first_bounded(texts, keyword)?;
    let value = parse_timeout(raw);
    if value.is_none() {
        debug!("Ignoring {} value with unknown unit: {}", keyword, raw);
    }
    value
}

fn tuning_flag(texts: &[ScanText<'_>], keyword: &str) -> Option<bool> {
    let raw = first_bounded(texts, keyword)?;
    let value = parse_flag(raw);
    if value.is_none() {
        debug!("Ignoring unrecognized {} value: {}", keyword, raw);
    }
    value
}

fn scan_tuning(texts: &[ScanText<'_>]) -> TuningOptions {
    TuningOptions {
        connect_timeout: tuning_timeout(texts, "CONNECT_TIMEOUT"),
        transport_connect_timeout: tuning_timeout(texts, "TRANSPORT_CONNECT_TIMEOUT"),
        retry_count: tuning_count(texts, "RETRY_COUNT"),
        load_balance: tuning_flag(texts, "LOAD_BALANCE"),
        failover: tuning_flag(texts, "FAILOVER"),
        server: first_bounded(texts, "SERVER").map(str::to_string),
    }
}
