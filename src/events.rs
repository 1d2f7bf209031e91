use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use crate::app::App;

/// File written by the `e` key.
pub const EXPORT_FILE: &str = "status_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If detail overlay is shown, keys scroll the record
    if app.show_detail_overlay {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.close_overlay();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(1),
            KeyCode::PageUp => app.scroll_detail_up(10),
            KeyCode::PageDown => app.scroll_detail_down(10),
            KeyCode::Home => app.detail_scroll = 0,
            _ => {}
        }
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Refresh control; disabled while a request is in flight
        KeyCode::Char('r') => {
            if !app.refresh() {
                app.set_status_message(app.locale.fetching().to_string());
            }
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            app.select_next()
        }
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Enter detail overlay
        KeyCode::Enter => app.enter_detail(),
        KeyCode::Esc => app.close_overlay(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.show_detail_overlay {
                app.scroll_detail_up(1);
            } else {
                app.select_prev();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.show_detail_overlay {
                app.scroll_detail_down(1);
            } else {
                app.select_next();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Locale;
    use crate::source::testing::{snapshot_at, ScriptedSource};
    use crate::source::Fetcher;
    use crate::ui::Theme;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app_with(source: ScriptedSource) -> App {
        let fetcher = Fetcher::new(Arc::new(source), Handle::current());
        App::new(fetcher, Duration::from_secs(60), Locale::En, Theme::dark())
    }

    #[tokio::test]
    async fn test_help_swallows_next_key() {
        let mut app = app_with(ScriptedSource::new());
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);

        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_refresh_key_while_loading_shows_message() {
        let source = ScriptedSource::new()
            .push(Duration::from_millis(200), Ok(snapshot_at("2025-06-01T12:00:00Z")));
        let mut app = app_with(source);
        app.start();
        assert!(app.is_loading());

        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.get_status_message(), Some("Fetching..."));
    }

    #[tokio::test]
    async fn test_selection_and_detail_keys() {
        let json = r#"{"timestamp":"2025-06-01T12:00:00Z","data":{
            "OpenAI":{"status":{"indicator":"none","description":"ok"}},
            "Anthropic":{"status":{"indicator":"minor","description":"slow"}}
        }}"#;
        let snapshot = serde_json::from_str(json).unwrap();
        let source = ScriptedSource::new().push(Duration::ZERO, Ok(snapshot));
        let mut app = app_with(source);
        app.start();
        for _ in 0..200 {
            if app.poll_fetch() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(app.cards.len(), 2);

        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_card, 1);
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_card, 1);

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.show_detail_overlay);

        // Arrows scroll the overlay instead of moving the selection
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.detail_scroll, 1);
        assert_eq!(app.selected_card, 1);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_detail_overlay);
        handle_key_event(&mut app, key(KeyCode::Home));
        assert_eq!(app.selected_card, 0);
    }
}
