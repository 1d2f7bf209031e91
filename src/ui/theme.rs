//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::StatusClass;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for operational status.
    pub operational: Color,
    /// Color for degraded performance and partial outages.
    pub degraded: Color,
    /// Color for major and critical outages.
    pub outage: Color,
    /// Color for maintenance.
    pub maintenance: Color,
    /// Color for unknown status.
    pub unknown: Color,
    /// Color for error messages.
    pub error: Color,
    /// Color for links.
    pub link: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section headings inside cards.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            operational: Color::Green,
            degraded: Color::Yellow,
            outage: Color::Red,
            maintenance: Color::LightBlue,
            unknown: Color::Gray,
            error: Color::LightRed,
            link: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            operational: Color::Green,
            degraded: Color::Yellow,
            outage: Color::Red,
            maintenance: Color::Blue,
            unknown: Color::DarkGray,
            error: Color::Red,
            link: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a status class
    pub fn status_style(&self, class: StatusClass) -> Style {
        match class {
            StatusClass::Operational => Style::default().fg(self.operational),
            StatusClass::Maintenance => Style::default().fg(self.maintenance),
            StatusClass::Degraded | StatusClass::PartialOutage => {
                Style::default().fg(self.degraded)
            }
            StatusClass::MajorOutage => Style::default().fg(self.outage),
            StatusClass::CriticalOutage => {
                Style::default().fg(self.outage).add_modifier(Modifier::BOLD)
            }
            StatusClass::Unknown => Style::default().fg(self.unknown),
        }
    }

    /// Style for error messages.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
