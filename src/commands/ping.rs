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

use anyhow::Result;
use owo_colors::OwoColorize;
use std::time::Duration;

use super::show::report_unknown;
use crate::manager::ConnectionManager;
use crate::probe::check_all;
use crate::tns::ConnectionDescriptor;

/// Probe the listeners of the named entries, or of every entry when `names`
/// is empty. Returns `true` when every probe succeeded.
pub async fn ping_connections(
    manager: &ConnectionManager,
    names: &[String],
    timeout: Duration,
) -> Result<bool> {
    let directory = manager.directory();

    let mut unknown = 0;
    let descriptors: Vec<ConnectionDescriptor> = if names.is_empty() {
        directory.iter().cloned().collect()
    } else {
        names
            .iter()
            .filter_map(|name| match directory.lookup(name) {
                Some(descriptor) => Some(descriptor.clone()),
                None => {
                    report_unknown(directory, name);
                    unknown += 1;
                    None
                }
            })
            .collect()
    };

    if descriptors.is_empty() {
        println!("{}", "No connections to check".dimmed());
        return Ok(unknown == 0);
    }

    let total = descriptors.len();
    let outcomes = check_all(descriptors, timeout).await;

    println!("\n{} {}\n", "▶".cyan(), "Listener Check Results".bold());

    let mut failed_count = 0;
    for outcome in &outcomes {
        if outcome.reachable {
            println!(
                "  {} {} ({}) - {} {}",
                "●".green(),
                outcome.name.bold(),
                outcome.address,
                "Reachable".green(),
                format!("{:.1} ms", outcome.elapsed.as_secs_f64() * 1000.0).dimmed()
            );
        } else {
            failed_count += 1;
            println!(
                "  {} {} ({}) - {}",
                "●".red(),
                outcome.name.bold(),
                outcome.address,
                "Unreachable".red()
            );
            if let Some(e) = &outcome.error {
                println!("    {} {}", "└".dimmed(), e.dimmed());
            }
        }
    }

    println!("{}", format_summary(total, total - failed_count, failed_count));

    Ok(failed_count == 0 && unknown == 0)
}

fn format_summary(total: usize, success: usize, failed: usize) -> String {
    let mut parts = vec![format!("{} connections", total.to_string().bold())];

    if success > 0 {
        parts.push(format!(
            "{} {}",
            success.to_string().green().bold(),
            "reachable".green()
        ));
    }

    if failed > 0 {
        parts.push(format!(
            "{} {}",
            failed.to_string().red().bold(),
            "unreachable".red()
        ));
    }

    let rule = "═".repeat(60);
    format!(
        "\n{}\n{}\n{}\n",
        rule.dimmed(),
        format!(" Summary: {} ", parts.join(" • ")).bold(),
        rule.dimmed()
    )
}
