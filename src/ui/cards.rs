//! Card grid rendering.
//!
//! Draws the status container: one bordered card per provider laid out in a
//! responsive grid, or a single error message when the last fetch failed.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{Card, CardBody, EventRow, Locale, StatusBody};
use crate::ui::Theme;

/// Minimum height of a card, borders included.
const MIN_CARD_HEIGHT: u16 = 9;

/// Render the status container.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref err) = app.load_error {
        let line = Line::from(Span::styled(err.clone(), app.theme.error_style()));
        render_message(frame, app, area, line);
        return;
    }

    if app.cards.is_empty() {
        let text = if app.is_loading() { app.locale.loading() } else { "-" };
        render_message(
            frame,
            app,
            area,
            Line::from(Span::styled(text, Style::default().add_modifier(Modifier::DIM))),
        );
        return;
    }

    let columns = column_count(area.width);
    let total_rows = app.cards.len().div_ceil(columns);
    let visible_rows = ((area.height / MIN_CARD_HEIGHT) as usize).clamp(1, total_rows);

    // Scroll so the selected card's row is visible
    let selected_row = app.selected_card / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let row_areas =
        Layout::vertical(vec![Constraint::Ratio(1, visible_rows as u32); visible_rows]).split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + row_offset;
        let col_areas = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell_area) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            let Some(card) = app.cards.get(index) else {
                break;
            };
            render_card(frame, app, card, index == app.selected_card, *cell_area);
        }
    }
}

fn column_count(width: u16) -> usize {
    if width >= 150 {
        3
    } else if width >= 90 {
        2
    } else {
        1
    }
}

fn render_message(frame: &mut Frame, app: &App, area: Rect, line: Line<'static>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_card(frame: &mut Frame, app: &App, card: &Card, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        match card.body {
            CardBody::Status(ref body) => app.theme.status_style(body.overall.class),
            _ => Style::default().fg(app.theme.error),
        }
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", card.icon, card.provider),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} ", card.link),
            Style::default().fg(app.theme.link).add_modifier(Modifier::DIM),
        ))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(border_style);

    let paragraph = Paragraph::new(card_lines(card, &app.theme, app.locale))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Text content of a card body.
pub fn card_lines(card: &Card, theme: &Theme, locale: Locale) -> Vec<Line<'static>> {
    match &card.body {
        CardBody::Error { message, hint } => {
            let mut lines = vec![Line::from(Span::styled(message.clone(), theme.error_style()))];
            if let Some(hint) = hint {
                lines.push(Line::from(Span::styled(
                    hint.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
            lines
        }
        CardBody::Invalid { message } => {
            vec![Line::from(Span::styled(message.clone(), theme.error_style()))]
        }
        CardBody::Status(body) => status_lines(body, theme, locale),
    }
}

fn status_lines(body: &StatusBody, theme: &Theme, locale: Locale) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{}: ", locale.overall_status())),
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

    if !body.components.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            locale.components_heading(body.components.len()),
            theme.header,
        )));
        for component in &body.components {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", component.name)),
                Span::styled(
                    format!("{} {}", component.status.class.symbol(), component.status.label),
                    theme.status_style(component.status.class),
                ),
            ]));
        }
    }

    push_events(
        &mut lines,
        locale.incidents_heading(),
        &body.incidents,
        body.incident_total,
        theme,
    );
    push_events(
        &mut lines,
        locale.maintenance_heading(),
        &body.maintenances,
        body.maintenance_total,
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

/// Append an incident/maintenance section; nothing is added for an empty list.
pub(crate) fn push_events(
    lines: &mut Vec<Line<'static>>,
    heading: &str,
    events: &[EventRow],
    total: usize,
    theme: &Theme,
) {
    if events.is_empty() {
        return;
    }

    lines.push(Line::from(""));
    let heading = if total > events.len() {
        format!("{} ({}/{})", heading, events.len(), total)
    } else {
        heading.to_string()
    };
    lines.push(Line::from(Span::styled(heading, theme.header)));

    for event in events {
        lines.push(Line::from(vec![
            Span::raw(format!("  • {} ", event.name)),
            Span::styled(format!("({})", event.status), Style::default().fg(theme.degraded)),
        ]));
        if let Some(ref link) = event.link {
            lines.push(Line::from(Span::styled(
                format!("    {}", link),
                Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED),
            )));
        }
    }
}
