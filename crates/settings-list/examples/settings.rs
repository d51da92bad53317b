//! Interactive settings screen.
//!
//! ```text
//! cargo run -p settings-list --example settings --features crossterm [-- path/to/screen.json]
//! ```
//!
//! Logs go to `settings-list.log` in the temp directory; set `SETTINGS_LOG=debug` for more.

use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Position;
use settings_list::config::ScreenConfig;
use settings_list::controller::ListController;
use settings_list::crossterm_input::input_event_from_crossterm;
use settings_list::help::HelpBar;
use settings_list::model::Activation;
use settings_list::render;
use settings_list::theme::Theme;
use settings_list::view::SettingsAction;
use settings_list::view::SettingsView;
use settings_list::view::SettingsViewOptions;
use std::error::Error;
use std::fs::File;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

type Status = Arc<Mutex<String>>;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let config = match std::env::args().nth(1) {
        Some(path) => ScreenConfig::load(path)?,
        None => ScreenConfig::builtin()?,
    };
    let title = config.title.clone();
    let search = config.search_options();

    let status: Status = Arc::new(Mutex::new(String::new()));
    let sink = status.clone();
    let model = config.into_model(move |label: &str| -> Activation {
        let label = label.to_string();
        let sink = sink.clone();
        Arc::new(move || {
            tracing::info!(%label, "row pressed");
            if let Ok(mut s) = sink.lock() {
                *s = format!("Pressed: {label}");
            }
        })
    })?;
    tracing::info!(rows = model.row_total(), "settings screen ready");

    let controller = ListController::new(model);
    let mut view = SettingsView::with_options(title, SettingsViewOptions::default(), search);
    let help = HelpBar::new(view.options().bindings.help());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(
        &mut terminal,
        &Theme::default(),
        &controller,
        &mut view,
        &help,
        &status,
    );

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res.map_err(Into::into)
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("settings-list.log");
    let file = File::create(&path)?;
    let filter = EnvFilter::try_from_env("SETTINGS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()?;
    Ok(())
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    controller: &ListController,
    view: &mut SettingsView,
    help: &HelpBar,
    status: &Status,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status_line, help_line] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .areas(area);

            let buf = f.buffer_mut();
            view.render(main, buf, theme, controller);

            let mut text = status.lock().map(|s| s.clone()).unwrap_or_default();
            if let Some(pct) = view.viewport.percent_y() {
                text = format!("{text:<40} scroll={pct}%");
            }
            render::render_str_clipped(
                status_line.x + 1,
                status_line.y,
                status_line.width.saturating_sub(1),
                buf,
                &text,
                theme.text_muted,
            );
            help.render_ref(help_line, buf, theme);

            if let Some((x, y)) = view.cursor_pos() {
                f.set_cursor_position(Position::new(x, y));
            }
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let event = crossterm::event::read()?;

        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press {
                let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c');
                let quit = key.code == KeyCode::Char('q') && !view.search().is_focused();
                if ctrl_c || quit {
                    return Ok(());
                }
            }
        }

        let Some(ev) = input_event_from_crossterm(event) else {
            continue;
        };
        match view.handle_event(ev, controller) {
            SettingsAction::Activated(ix) => {
                if let Err(err) = controller.activate_row(ix.section, ix.row) {
                    tracing::warn!(%ix, error = %err, "activation failed");
                }
            }
            SettingsAction::Toggled { index, on } => {
                tracing::info!(%index, on, "switch flipped");
                if let Ok(mut s) = status.lock() {
                    *s = format!("Switched {}", if on { "on" } else { "off" });
                }
            }
            SettingsAction::Redraw | SettingsAction::None => {}
        }
    }
}
