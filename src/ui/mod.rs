//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`cards`]: The status container, a grid of provider cards
//! - [`detail`]: Modal overlay showing a provider's full record
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │  counts + last updated
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Cards (cards::render)                │  or one error message
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │  refresh control / loading
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - detail::render_overlay
//!    - common::render_help
//! ```

pub mod cards;
pub mod common;
pub mod detail;
pub mod theme;

pub use theme::Theme;
