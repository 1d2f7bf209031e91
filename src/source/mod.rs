//! Snapshot sources and fetch scheduling.
//!
//! This module provides a trait-based abstraction for loading status
//! snapshots from various places (an HTTP endpoint serving `status.json`, or
//! the collector's output file on disk), plus the [`Fetcher`] that runs those
//! loads in the background and decides which result is authoritative.

mod error;
mod fetcher;
mod file;
mod http;
mod snapshot;

pub use error::FetchError;
pub use fetcher::{FetchOutcome, Fetcher, Trigger};
pub use file::FileSource;
pub use http::{HttpSource, HttpSourceBuilder};
pub use snapshot::{
    Component, Incident, OverallStatus, Page, ProviderStatus, StatusReport, StatusSnapshot,
};

#[cfg(test)]
pub(crate) use fetcher::tests as testing;

use std::fmt::Debug;

use async_trait::async_trait;

/// Trait for loading status snapshots from various sources.
///
/// Each call performs one complete load; scheduling and overlap handling
/// live in [`Fetcher`].
///
/// # Example
///
/// ```no_run
/// use statusboard::{FileSource, SnapshotSource};
///
/// # tokio_test::block_on(async {
/// let source = FileSource::new("frontend/status.json");
/// match source.fetch().await {
///     Ok(snapshot) => println!("Got {} providers", snapshot.data.len()),
///     Err(e) => eprintln!("{}", e),
/// }
/// # });
/// ```
#[async_trait]
pub trait SnapshotSource: Send + Sync + Debug {
    /// Load the current snapshot.
    async fn fetch(&self) -> Result<StatusSnapshot, FetchError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
