//! # statusboard
//!
//! A terminal dashboard and library for LLM provider status pages.
//!
//! A separate collector writes a `status.json` snapshot holding one status
//! report (or fetch error) per provider. This crate loads that snapshot over
//! HTTP or from disk, normalizes each report into a display-ready card, and
//! shows the cards in an interactive terminal UI that refreshes on a schedule.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (cards)  │    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── Fetcher ◀── HttpSource | FileSource         │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, the fetch lifecycle and selection
//! - **[`source`]**: The [`SnapshotSource`] trait, its HTTP and file
//!   implementations, and the [`Fetcher`] that runs requests in the background
//!   and drops results that were superseded
//! - **[`data`]**: Status normalization, the provider catalog, relative
//!   timestamps and the [`Card`] view model
//! - **[`ui`]**: Terminal rendering using ratatui: card grid, detail overlay,
//!   header and status bar
//! - **[`settings`]**: Layered configuration (file, environment)
//! - **[`export`]**: JSON export of the rendered cards
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Read the snapshot written by the collector
//! statusboard --file frontend/status.json
//!
//! # Poll a published snapshot every 30 seconds, in Chinese
//! statusboard --url https://example.com/status.json --refresh 30 --locale zh
//!
//! # Fetch once and write the cards as JSON
//! statusboard --export cards.json
//! ```
//!
//! ### Building cards from a snapshot
//!
//! ```
//! use statusboard::{build_cards, CardBody, Locale, StatusSnapshot};
//!
//! let snapshot: StatusSnapshot = serde_json::from_str(r#"{
//!     "timestamp": "2025-06-01T12:00:00Z",
//!     "data": {
//!         "Foo": {"status": {"indicator": "none", "description": "All good"}},
//!         "OpenAI": {"error": "timeout"}
//!     }
//! }"#).unwrap();
//!
//! let cards = build_cards(&snapshot, Locale::En);
//! assert_eq!(cards[0].provider, "OpenAI");
//! assert!(matches!(cards[0].body, CardBody::Error { .. }));
//! assert_eq!(cards[1].provider, "Foo");
//! ```
//!
//! ### Normalizing an indicator
//!
//! ```
//! use statusboard::{normalize, Locale, StatusClass};
//!
//! let info = normalize("Partial_Outage", Locale::En);
//! assert_eq!(info.class, StatusClass::PartialOutage);
//! assert_eq!(info.label, "Partial Outage");
//! ```
//!
//! ### Driving the app from a file source
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use statusboard::{App, Fetcher, FileSource, Locale, Theme};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let source = Arc::new(FileSource::new("frontend/status.json"));
//! let fetcher = Fetcher::new(source, rt.handle().clone());
//! let mut app = App::new(fetcher, Duration::from_secs(60), Locale::En, Theme::dark());
//! app.start();
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod export;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Phase};
pub use data::{build_card, build_cards, normalize, Card, CardBody, Locale, StatusClass, StatusInfo};
pub use settings::Settings;
pub use source::{
    FetchError, FetchOutcome, Fetcher, FileSource, HttpSource, HttpSourceBuilder, ProviderStatus,
    SnapshotSource, StatusReport, StatusSnapshot, Trigger,
};
pub use ui::Theme;
