use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::search_shell::SearchShell;
use color_eyre::eyre::Result;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use std::io::Stdout;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;
use stocklens_search::SearchHistory;
use stocklens_search::SourceSet;
use tokio::sync::mpsc::unbounded_channel;
use tracing::info;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout()))?)
}

pub fn restore_terminal() -> Result<()> {
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    shell: SearchShell,
    sources: SourceSet,
    app_event_tx: AppEventSender,
    last_route: Option<String>,
}

impl App {
    /// Drive the dashboard until the user quits. Single-threaded
    /// cooperative loop: terminal events, app events and the debounce
    /// deadline race in one `select!`; nothing blocks.
    pub async fn run(tui: &mut Tui, sources: SourceSet, history_path: PathBuf) -> Result<()> {
        use tokio_stream::StreamExt;

        let (tx, mut rx) = unbounded_channel();
        let app_event_tx = AppEventSender::new(tx);
        let history = SearchHistory::load(history_path);
        let shell = SearchShell::new(&sources, history, app_event_tx.clone());
        let mut app = Self {
            shell,
            sources,
            app_event_tx,
            last_route: None,
        };

        let mut terminal_events = EventStream::new();
        loop {
            app.shell.refresh_sources(&app.sources);
            tui.draw(|frame| app.draw(frame))?;

            let deadline = app.shell.deadline();
            let timer = tokio::time::sleep_until(
                deadline
                    .map(tokio::time::Instant::from_std)
                    .unwrap_or_else(|| {
                        tokio::time::Instant::now() + Duration::from_secs(60)
                    }),
            );
            tokio::select! {
                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => app.handle_terminal_event(event),
                        Some(Err(_)) | None => break,
                    }
                }
                Some(event) = rx.recv() => {
                    match event {
                        AppEvent::Navigate(route) => {
                            info!(%route, "route transition requested");
                            app.last_route = Some(route);
                        }
                        AppEvent::ExitRequest => break,
                    }
                }
                _ = timer, if deadline.is_some() => {
                    app.shell.on_tick(Instant::now());
                }
            }
        }
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.shell.handle_key(key, Instant::now()) {
                    return;
                }
                // Keys the shell declined while collapsed.
                match key.code {
                    KeyCode::Char('q') => self.app_event_tx.send(AppEvent::ExitRequest),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.app_event_tx.send(AppEvent::ExitRequest);
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => self.shell.handle_mouse(mouse),
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [title_area, shell_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from("Stocklens · asset inventory".bold())),
            title_area,
        );
        self.shell.render(shell_area, frame.buffer_mut());

        let status = match &self.last_route {
            Some(route) => Line::from(vec!["opened ".dim(), route.clone().into()]),
            None => Line::from("Ctrl+K search · q quit".dim()),
        };
        frame.render_widget(Paragraph::new(status), status_area);
    }
}
