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

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::tns::{ConnectionDescriptor, Directory};

/// Print one entry. Returns `false` when the name is unknown.
pub fn show_connection(directory: &Directory, name: &str, json: bool) -> Result<bool> {
    let Some(descriptor) = directory.lookup(name) else {
        report_unknown(directory, name);
        return Ok(false);
    };

    if json {
        let rendered = serde_json::to_string_pretty(descriptor)
            .with_context(|| format!("Failed to serialize connection {name}"))?;
        println!("{rendered}");
    } else {
        print_descriptor(descriptor);
    }

    Ok(true)
}

/// Explain that `name` is not in the directory, listing what is
pub fn report_unknown(directory: &Directory, name: &str) {
    eprintln!(
        "{} {} {}",
        "●".red(),
        name.bold(),
        "not found in connection directory".red()
    );

    let names = directory.names();
    if names.is_empty() {
        eprintln!("    {} {}", "└".dimmed(), "directory is empty".dimmed());
    } else {
        eprintln!(
            "    {} {} {}",
            "└".dimmed(),
            "Available:".dimmed(),
            names.join(", ").dimmed()
        );
    }
}

fn print_descriptor(descriptor: &ConnectionDescriptor) {
    println!("\n{} {}\n", "▶".cyan(), descriptor.canonical_name().bold());
    field("Host", &descriptor.host);
    field("Port", &descriptor.port.to_string());
    field(descriptor.service.kind.keyword(), &descriptor.service.value);
    field("Protocol", descriptor.protocol.as_str());

    let tuning = &descriptor.tuning;
    if let Some(limit) = tuning.connect_timeout {
        field("CONNECT_TIMEOUT", &format!("{limit:?}"));
    }
    if let Some(limit) = tuning.transport_connect_timeout {
        field("TRANSPORT_CONNECT_TIMEOUT", &format!("{limit:?}"));
    }
    if let Some(count) = tuning.retry_count {
        field("RETRY_COUNT", &count.to_string());
    }
    if let Some(flag) = tuning.load_balance {
        field("LOAD_BALANCE", &flag.to_string());
    }
    if let Some(flag) = tuning.failover {
        field("FAILOVER", &flag.to_string());
    }
    if let Some(server) = &tuning.server {
        field("SERVER", server);
    }

    field("DSN", &descriptor.to_dsn());
    println!();
}

fn field(label: &str, value: &str) {
    println!("  {:<26} {}", format!("{label}:").dimmed(), value);
}
