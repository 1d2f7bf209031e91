use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

use statusboard::{
    build_cards, events, export, ui, App, Fetcher, FileSource, HttpSource, Locale, Settings,
    SnapshotSource, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "statusboard")]
#[command(about = "Terminal dashboard for LLM provider status pages")]
struct Args {
    /// URL of the status.json snapshot (takes precedence over --file)
    #[arg(short, long, conflicts_with = "file")]
    url: Option<String>,

    /// Path to status.json [default: frontend/status.json]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Refresh interval in seconds [default: 60]
    #[arg(short, long)]
    refresh: Option<u64>,

    /// HTTP request timeout in seconds [default: 30]
    #[arg(long)]
    timeout: Option<u64>,

    /// Display language
    #[arg(short, long, value_enum)]
    locale: Option<Locale>,

    /// Config file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file while the dashboard is running
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fetch once, export the rendered cards to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

impl Args {
    /// Command-line flags win over config file and environment.
    fn apply(&self, settings: &mut Settings) {
        if let Some(ref url) = self.url {
            settings.url = Some(url.clone());
        }
        if let Some(ref file) = self.file {
            settings.file = file.clone();
            settings.url = None;
        }
        if let Some(refresh) = self.refresh {
            settings.refresh_secs = refresh;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(locale) = self.locale {
            settings.locale = locale;
        }
        if let Some(ref log_file) = self.log_file {
            settings.log_file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings);
    settings.validate()?;

    init_logging(&settings, args.export.is_some())?;

    let rt = tokio::runtime::Runtime::new()?;
    let source = build_source(&settings)?;

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_to_file(&rt, source.as_ref(), export_path, settings.locale);
    }

    let fetcher = Fetcher::new(source, rt.handle().clone());
    let app = App::new(
        fetcher,
        settings.refresh_interval(),
        settings.locale,
        Theme::auto_detect(),
    );
    run_tui(app)
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive runs only log when a log file is
/// configured. Export runs log to stderr.
fn init_logging(settings: &Settings, export_mode: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if export_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else if let Some(ref path) = settings.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn build_source(settings: &Settings) -> Result<Arc<dyn SnapshotSource>> {
    match settings.url {
        Some(ref url) => {
            let source = HttpSource::builder()
                .url(url.clone())
                .timeout(settings.timeout())
                .build()?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(FileSource::new(&settings.file))),
    }
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    tracing::info!(source = app.source_description(), "Starting dashboard");
    app.start();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let top = (area.height / 2).saturating_sub(2);
                let centered = ratatui::layout::Rect::new(0, top, area.width, 5);
                frame.render_widget(paragraph, centered.intersection(area));
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::cards::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            if app.show_detail_overlay {
                ui::detail::render_overlay(frame, app, area);
            }

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        app.poll_fetch();
        app.tick(Instant::now());
    }

    Ok(())
}

/// Fetch one snapshot and export its cards to a JSON file
fn export_to_file(
    rt: &tokio::runtime::Runtime,
    source: &dyn SnapshotSource,
    export_path: &Path,
    locale: Locale,
) -> Result<()> {
    let snapshot = rt
        .block_on(source.fetch())
        .map_err(|e| anyhow::anyhow!(locale.load_failed(&e.to_string())))?;
    let cards = build_cards(&snapshot, locale);
    export::write_cards(export_path, &snapshot, &cards, source.description())?;

    println!("Exported {} providers to: {}", cards.len(), export_path.display());
    Ok(())
}
