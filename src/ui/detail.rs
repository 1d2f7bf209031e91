//! Detail overlay rendering.
//!
//! Displays a modal overlay with the full record of the selected provider:
//! unlike the card, every incident and maintenance is listed, with impact and
//! scheduled window where the snapshot has them.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{Card, CardBody};
use crate::source::{Incident, ProviderStatus};
use crate::ui::cards::card_lines;
use crate::ui::Theme;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 12;

/// Render the provider detail as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(card) = app.selected() else {
        return;
    };

    // Width: 90% of screen, clamped to [MIN_OVERLAY_WIDTH, 110]
    let overlay_width = (area.width / 10 * 9).clamp(MIN_OVERLAY_WIDTH, 110);
    // Height: 90% of screen, clamped to [MIN_OVERLAY_HEIGHT, 50]
    let overlay_height = (area.height / 10 * 9).clamp(MIN_OVERLAY_HEIGHT, 50);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Min(6),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(overlay_area);

    let record = app.snapshot.as_ref().and_then(|s| s.data.get(&card.provider));
    let lines = detail_lines(card, record, &app.theme, app);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", card.icon, card.provider),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(format!(" {} ", card.link))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " ↑/↓ scroll  Esc close ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[1]);
}

fn detail_lines(
    card: &Card,
    record: Option<&ProviderStatus>,
    theme: &Theme,
    app: &App,
) -> Vec<Line<'static>> {
    let (CardBody::Status(body), Some(ProviderStatus::Report(report))) = (&card.body, record)
    else {
        return card_lines(card, theme, app.locale);
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{}: ", app.locale.overall_status())),
            Span::styled(
                format!("{} {}", body.overall.class.symbol(), body.overall.label),
                theme.status_style(body.overall.class).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            body.description.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    if let Some(updated) = report.page.as_ref().and_then(|p| p.updated_at.clone()) {
        lines.push(Line::from(Span::styled(
            format!("{}: {}", app.locale.updated(), updated),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    if !body.components.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            app.locale.components_heading(body.components.len()),
            theme.header,
        )));
        for (row, component) in body.components.iter().zip(&report.components) {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", row.name)),
                Span::styled(
                    format!("{} {}", row.status.class.symbol(), row.status.label),
                    theme.status_style(row.status.class),
                ),
            ]));
            if let Some(ref description) = component.description {
                lines.push(Line::from(Span::styled(
                    format!("    {}", description),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
        }
    }

    push_all_events(&mut lines, app.locale.incidents_heading(), &report.incidents, theme);
    push_all_events(
        &mut lines,
        app.locale.maintenance_heading(),
        &report.scheduled_maintenances,
        theme,
    );

    if let Some(ref note) = body.note {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            note.clone(),
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        )));
    }

    lines
}

fn push_all_events(
    lines: &mut Vec<Line<'static>>,
    heading: &str,
    events: &[Incident],
    theme: &Theme,
) {
    if events.is_empty() {
        return;
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} ({})", heading, events.len()),
        theme.header,
    )));

    for event in events {
        let mut spans = vec![
            Span::raw(format!("  • {} ", event.name)),
            Span::styled(format!("({})", event.status), Style::default().fg(theme.degraded)),
        ];
        if let Some(ref impact) = event.impact {
            spans.push(Span::styled(
                format!(" [{}]", impact),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        lines.push(Line::from(spans));

        match (&event.scheduled_for, &event.scheduled_until) {
            (Some(from), Some(until)) => {
                lines.push(Line::from(format!("    {} → {}", from, until)))
            }
            (Some(from), None) => lines.push(Line::from(format!("    {}", from))),
            _ => {}
        }

        if let Some(ref link) = event.shortlink {
            lines.push(Line::from(Span::styled(
                format!("    {}", link),
                Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED),
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{build_cards, Locale};
    use crate::source::testing::ScriptedSource;
    use crate::source::{Fetcher, StatusSnapshot};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::runtime::Handle;

    fn app_with_detail() -> App {
        let snapshot: StatusSnapshot = serde_json::from_str(
            r#"{"timestamp":"2025-06-01T12:00:00Z","data":{"OpenAI":{
                "status":{"indicator":"minor","description":"Degraded"},
                "incidents":[
                    {"name":"i1","status":"investigating","impact":"minor"},
                    {"name":"i2","status":"resolved"},
                    {"name":"i3","status":"resolved"},
                    {"name":"i4","status":"resolved"}
                ]
            }}}"#,
        )
        .unwrap();
        let fetcher = Fetcher::new(Arc::new(ScriptedSource::new()), Handle::current());
        let mut app = App::new(fetcher, Duration::from_secs(60), Locale::En, Theme::dark());
        app.cards = build_cards(&snapshot, Locale::En);
        app.snapshot = Some(snapshot);
        app.enter_detail();
        app
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_overlay(frame, app, area);
            })
            .unwrap();
        terminal.backend().buffer().content.iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn test_overlay_lists_every_incident() {
        let app = app_with_detail();
        assert!(app.show_detail_overlay);

        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Recent incidents (4)"));
        assert!(screen.contains("i4"));
        assert!(screen.contains("[minor]"));
    }

    #[tokio::test]
    async fn test_overlay_on_very_wide_terminal() {
        let app = app_with_detail();

        let screen = draw(&app, 800, 40);
        assert!(screen.contains("OpenAI"));
    }
}
