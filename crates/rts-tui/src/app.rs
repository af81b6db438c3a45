//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The loop runs on the
//! calling thread; debounce timers and fetches run as Tokio tasks on the
//! runtime the caller has entered.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        header::Header,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results_list::{ResultsList, ResultsListState},
        status_line::{Status, StatusLine},
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use rts_core::{config::Config, SearchView};
use rts_fetch::SearchSession;
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub query: QueryBarState,
    pub results: ResultsListState,
    pub session: SearchSession,
    /// Snapshot of the session view taken at the top of each frame.
    pub view: SearchView,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(session: SearchSession, config: Config, theme: Theme) -> Self {
        let view = session.view();
        App {
            state: AppState {
                query: QueryBarState::default(),
                results: ResultsListState::default(),
                session,
                view,
                theme,
                config,
                show_help: false,
                quit: false,
            },
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.state.quit {
                break;
            }

            // Short poll keeps the loading indicator and results fresh while
            // a fetch lands in the background.
            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Press => {}
                    raw => {
                        if let Some(ev) = event::to_app_event(raw) {
                            tracing::debug!(event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Refresh the view snapshot and render one frame.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        self.refresh();
        let s = &self.state;
        terminal
            .draw(|frame| draw(frame, s))
            .map_err(|e| anyhow::anyhow!("failed to draw frame: {e}"))?;
        Ok(())
    }

    fn refresh(&mut self) {
        let s = &mut self.state;
        s.view = s.session.view();
        s.results.sync(&s.view);
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                AppEvent::Quit => s.quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit | AppEvent::Escape => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }
            AppEvent::Nav(event::Direction::Up | event::Direction::Down)
            | AppEvent::PageUp
            | AppEvent::PageDown => {
                let total = s.view.results.len();
                s.results.handle(&event, total);
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            edit => {
                if s.query.handle(&edit) {
                    s.session.input(s.query.query.clone());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: header | query bar | status | results
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let status = Status::from_view(
        state.session.query(),
        &state.view,
        state.config.ui.show_errors,
    );

    frame.render_widget(Header, vert[0]);
    let query_bar = QueryBar::new(&state.query, &state.theme);
    let (cx, cy) = query_bar.cursor_position(vert[1]);
    frame.render_widget(query_bar, vert[1]);
    frame.render_widget(StatusLine::new(status, &state.theme), vert[2]);
    frame.render_widget(
        ResultsList::new(
            &state.results,
            &state.view.results,
            state.config.ui.show_email,
            &state.theme,
        ),
        vert[3],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    } else {
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
