//! Display models derived from status snapshots.
//!
//! This module handles the transformation of raw snapshots into the cards
//! and labels the UI draws.
//!
//! ## Submodules
//!
//! - [`indicator`]: Normalization of raw status codes into [`StatusInfo`]
//! - [`provider`]: Catalog of known providers (status page, icon, order)
//! - [`card`]: Card construction ([`build_cards`])
//! - [`time`]: Relative/absolute formatting of the snapshot timestamp
//! - [`locale`]: Localized labels
//!
//! ## Data Flow
//!
//! ```text
//! StatusSnapshot (raw JSON)
//!        │
//!        ├──▶ build_cards()  ──▶ Vec<Card> (status codes normalized)
//!        │
//!        └──▶ LastUpdated::new() (header label)
//! ```

pub mod card;
pub mod indicator;
pub mod locale;
pub mod provider;
pub mod time;

pub use card::{build_card, build_cards, Card, CardBody, ComponentRow, EventRow, StatusBody};
pub use indicator::{normalize, StatusClass, StatusInfo};
pub use locale::Locale;
pub use provider::ProviderInfo;
pub use time::LastUpdated;
