//! Common UI components shared across the dashboard.
//!
//! This module contains the header bar, status bar, and help overlay.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::StatusClass;

/// Spinner frames for the loading indicator.
const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

/// Render the header bar with provider counts and the last-updated label.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " LLM STATUS ",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if !app.cards.is_empty() {
        let mut operational = 0;
        let mut degraded = 0;
        let mut failed = 0;
        for card in &app.cards {
            match card.overall() {
                Some(info) if info.class == StatusClass::Operational => operational += 1,
                Some(_) => degraded += 1,
                None => failed += 1,
            }
        }

        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            operational.to_string(),
            Style::default().fg(app.theme.operational),
        ));
        spans.push(Span::raw(" ok "));
        spans.push(count_span(degraded, app.theme.degraded));
        spans.push(Span::raw(" degraded "));
        spans.push(count_span(failed, app.theme.error));
        spans.push(Span::raw(" failed "));
    }

    if let Some(updated) = app.last_updated(Utc::now()) {
        spans.push(Span::raw("│ "));
        spans.push(Span::raw(format!("{} ", app.locale.updated())));
        spans.push(Span::styled(
            updated.relative,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" ({})", updated.absolute),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn count_span(n: usize, color: ratatui::style::Color) -> Span<'static> {
    if n > 0 {
        Span::styled(
            n.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("0", Style::default().add_modifier(Modifier::DIM))
    }
}

/// Render the status bar at the bottom.
///
/// Shows: refresh control (or the loading indicator while a request is in
/// flight), the data source, and available controls. Temporary status
/// messages take over the whole bar.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let control = if app.is_loading() {
        let tick = (Utc::now().timestamp_subsec_millis() / 125) as usize % SPINNER.len();
        Span::styled(
            format!(" {} {} ", SPINNER[tick], app.locale.fetching()),
            Style::default().fg(app.theme.highlight),
        )
    } else {
        Span::styled(
            format!(" [r] {} ", app.locale.refresh()),
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        control,
        Span::styled(
            format!(
                "| {} | ↑↓:select Enter:detail e:export ?:help q:quit",
                app.source_description()
            ),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Select card"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       View detail"),
        Line::from("  Esc         Close overlay"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Refresh now"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 18u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
