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

//! Lazily-populated connection directory

use super::decoder::decode_entry;
use super::error::TnsError;
use super::reader::remove_noise;
use super::source::{FileSource, LineSource, StringSource};
use super::splitter::split_entries;
use super::types::{canonical_name, ConnectionDescriptor};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Mapping from canonical (uppercased) entry name to descriptor
pub type ConnectionMap = BTreeMap<String, ConnectionDescriptor>;

#[derive(Debug, Default)]
struct LoadedState {
    connections: ConnectionMap,
    /// Source failure seen during the one and only load
    source_error: Option<TnsError>,
}

/// Connection directory backed by a [`LineSource`].
///
/// The directory starts out unloaded and reads its source exactly once, on
/// the first call to any read operation. After that it is immutable; build a
/// new `Directory` to pick up changes to the source.
pub struct Directory {
    source: Box<dyn LineSource>,
    state: OnceCell<LoadedState>,
}

impl Directory {
    /// Directory backed by a file on disk
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::from_source(FileSource::new(path))
    }

    /// Directory backed by in-memory text
    pub fn from_text(content: impl Into<String>) -> Self {
        Self::from_source(StringSource::new(content))
    }

    pub fn from_source<S: LineSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            state: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.get().is_some()
    }

    /// Populate the directory if needed and return the mapping.
    ///
    /// A missing or unreadable source is logged and yields an empty mapping.
    pub fn load(&self) -> &ConnectionMap {
        &self.state().connections
    }

    /// Like [`load`](Self::load), but reports a source failure to the caller.
    ///
    /// The failure is still cached: later calls return the same error
    /// without touching the source again.
    pub fn try_load(&self) -> Result<&ConnectionMap, TnsError> {
        let state = self.state();
        match &state.source_error {
            Some(e) => Err(e.clone()),
            None => Ok(&state.connections),
        }
    }

    /// Sorted canonical names of all known connections
    pub fn names(&self) -> Vec<String> {
        self.load().keys().cloned().collect()
    }

    /// Resolve a connection name, case-insensitively
    pub fn lookup(&self, name: &str) -> Option<&ConnectionDescriptor> {
        self.load().get(&canonical_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    /// Descriptors ordered by canonical name
    pub fn iter(&self) -> impl Iterator<Item = &ConnectionDescriptor> {
        self.load().values()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    fn state(&self) -> &LoadedState {
        self.state.get_or_init(|| self.populate())
    }

    fn populate(&self) -> LoadedState {
        let origin = self.source.describe();

        match self.source.read_lines() {
            Ok(lines) => {
                let connections = build_connections(lines);
                info!(
                    "Loaded {} connections from {}",
                    connections.len(),
                    origin
                );
                LoadedState {
                    connections,
                    source_error: None,
                }
            }
            Err(e) => {
                error!("Failed to load connection directory: {}", e);
                LoadedState {
                    connections: ConnectionMap::new(),
                    source_error: Some(e),
                }
            }
        }
    }
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directory")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .field("connections", &self.state.get().map(|s| s.connections.len()))
            .finish()
    }
}

/// Run noise filtering, entry splitting and decoding over raw lines.
///
/// Unparseable entries are logged and skipped. When two entries share a
/// name the later one wins.
pub fn build_connections(lines: Vec<String>) -> ConnectionMap {
    let mut connections = ConnectionMap::new();

    for entry in split_entries(remove_noise(lines)) {
        match decode_entry(&entry) {
            Ok(descriptor) => {
                debug!(
                    "Loaded connection: {} -> {}:{}/{}",
                    descriptor.name, descriptor.host, descriptor.port, descriptor.service
                );
                let key = descriptor.canonical_name();
                if let Some(previous) = connections.insert(key, descriptor) {
                    debug!("Connection {} redefined; keeping the later entry", previous.name);
                }
            }
            Err(e) => warn!("Skipping entry: {}", e),
        }
    }

    connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const SAMPLE: &str = "# Sample directory
TESTDB =
  (DESCRIPTION =
    (ADDRESS = (PROTOCOL = TCP)(HOST = db1.example.com)(PORT = 1521))
    (CONNECT_DATA = (SERVICE_NAME = TESTSVC))
  )

alpha=(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=alpha-db)(PORT=1600))(CONNECT_DATA=(SID=ALPHA)))
";

    struct CountingSource {
        inner: StringSource,
        reads: Arc<AtomicUsize>,
    }

    impl LineSource for CountingSource {
        fn read_lines(&self) -> Result<Vec<String>, TnsError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read_lines()
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn counting(content: &str) -> (Directory, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let directory = Directory::from_source(CountingSource {
            inner: StringSource::new(content),
            reads: Arc::clone(&reads),
        });
        (directory, reads)
    }

    #[test]
    fn test_directory_starts_unloaded() {
        let (directory, reads) = counting(SAMPLE);
        assert!(!directory.is_loaded());
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        let _ = directory.names();
        assert!(directory.is_loaded());
    }

    #[test]
    fn test_load_reads_source_once() {
        let (directory, reads) = counting(SAMPLE);
        let first = directory.load().clone();
        let second = directory.load().clone();
        assert_eq!(first, second);
        let _ = directory.lookup("testdb");
        let _ = directory.names();
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let directory = Directory::from_text(SAMPLE);
        let descriptor = directory.lookup("testdb").unwrap();
        assert_eq!(descriptor.host, "db1.example.com");
        assert!(directory.contains("ALPHA"));
        assert!(directory.lookup("missing").is_none());
    }

    #[test]
    fn test_names_are_sorted_canonical() {
        let directory = Directory::from_text(SAMPLE);
        assert_eq!(directory.names(), vec!["ALPHA", "TESTDB"]);
        assert_eq!(directory.len(), 2);
        let hosts: Vec<&str> = directory.iter().map(|d| d.host.as_str()).collect();
        assert_eq!(hosts, vec!["alpha-db", "db1.example.com"]);
    }

    #[test]
    fn test_try_load_reports_missing_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let directory = Directory::open(dir.path().join("absent.ora"));
        assert!(matches!(
            directory.try_load(),
            Err(TnsError::SourceNotFound { .. })
        ));
        assert!(directory.is_empty());
        assert!(directory.names().is_empty());
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let (directory, reads) = counting(SAMPLE);
        let directory = Arc::new(directory);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let directory = Arc::clone(&directory);
                std::thread::spawn(move || directory.names().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }
}
