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

use owo_colors::OwoColorize;

use crate::tns::{Directory, ServiceKind};

pub fn list_connections(directory: &Directory) {
    if directory.is_empty() {
        println!(
            "{} ({})",
            "No connections found".dimmed(),
            directory.source_description().dimmed()
        );
        return;
    }

    println!(
        "\n{} {} ({} from {})\n",
        "▶".cyan(),
        "Available connections".bold(),
        directory.len().to_string().yellow(),
        directory.source_description().dimmed()
    );

    let width = directory
        .names()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);

    for descriptor in directory.iter() {
        let kind = match descriptor.service.kind {
            ServiceKind::ServiceName => "",
            ServiceKind::Sid => " (SID)",
        };
        println!(
            "  {} {} {} {}:{}/{}{}",
            "●".blue(),
            format!("{:width$}", descriptor.canonical_name()).bold(),
            "->".dimmed(),
            descriptor.host,
            descriptor.port.to_string().yellow(),
            descriptor.service.value,
            kind.dimmed()
        );
    }
    println!();
}
