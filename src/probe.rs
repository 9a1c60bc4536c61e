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

//! TCP reachability checks for listener endpoints
//!
//! A probe only opens and closes a TCP connection to `host:port`. It says
//! nothing about whether the service behind the listener accepts sessions.

use crate::tns::ConnectionDescriptor;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

/// Result of probing one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Canonical connection name
    pub name: String,
    /// `host:port` that was probed
    pub address: String,
    pub reachable: bool,
    pub elapsed: Duration,
    pub error: Option<String>,
}

/// Timeout to use for a descriptor: its `CONNECT_TIMEOUT` if set
pub fn effective_timeout(descriptor: &ConnectionDescriptor, default: Duration) -> Duration {
    descriptor
        .tuning
        .connect_timeout
        .filter(|limit| !limit.is_zero())
        .unwrap_or(default)
}

/// Try to open a TCP connection to the descriptor's listener
pub async fn check_reachable(descriptor: &ConnectionDescriptor, default_timeout: Duration) -> ProbeOutcome {
    let address = format!("{}:{}", descriptor.host, descriptor.port);
    let limit = effective_timeout(descriptor, default_timeout);
    let started = Instant::now();

    trace!("Probing {} at {} (timeout {:?})", descriptor.name, address, limit);

    let result = timeout(limit, TcpStream::connect((descriptor.host.as_str(), descriptor.port))).await;
    let elapsed = started.elapsed();

    let error = match result {
        Ok(Ok(_stream)) => None,
        Ok(Err(e)) => Some(e.to_string()),
        Err(_) => Some(format!("timed out after {limit:?}")),
    };

    if let Some(ref e) = error {
        debug!("Probe of {} at {} failed: {}", descriptor.name, address, e);
    }

    ProbeOutcome {
        name: descriptor.canonical_name(),
        address,
        reachable: error.is_none(),
        elapsed,
        error,
    }
}

/// Probe several descriptors concurrently, returning outcomes in input order.
///
/// Every descriptor gets an outcome. A task that panics or is cancelled is
/// reported as unreachable.
pub async fn check_all(descriptors: Vec<ConnectionDescriptor>, default_timeout: Duration) -> Vec<ProbeOutcome> {
    let targets: Vec<(String, String)> = descriptors
        .iter()
        .map(|d| (d.canonical_name(), format!("{}:{}", d.host, d.port)))
        .collect();

    let mut set = JoinSet::new();
    for (index, descriptor) in descriptors.into_iter().enumerate() {
        set.spawn(async move { (index, check_reachable(&descriptor, default_timeout).await) });
    }

    let mut slots: Vec<Option<ProbeOutcome>> = vec![None; targets.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, outcome)) => slots[index] = Some(outcome),
            Err(e) => warn!("Probe task failed: {}", e),
        }
    }

    fill_lost(targets, slots)
}

/// Replace empty slots with unreachable outcomes for their targets
fn fill_lost(targets: Vec<(String, String)>, slots: Vec<Option<ProbeOutcome>>) -> Vec<ProbeOutcome> {
    targets
        .into_iter()
        .zip(slots)
        .map(|((name, address), slot)| {
            slot.unwrap_or_else(|| ProbeOutcome {
                name,
                address,
                reachable: false,
                elapsed: Duration::ZERO,
                error: Some("check did not complete".to_string()),
            })
        })
        .collect()
}
