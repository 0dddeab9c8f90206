use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use client_logging::{client_error, client_info};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use torbot_core::{update, AppState, AppViewModel, Msg, ScreenView};
use torbot_transport::ReqwestTransport;

use super::cli::Cli;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::{self, input::KeyAction, UiState};

type Tui = Terminal<CrosstermBackend<io::Stderr>>;

/// How long to wait for a key before checking for transport completions.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli).context("loading configuration")?;
    client_logging::initialize(&config.log);
    client_info!(
        "Starting TorBot client endpoint={}",
        config.transport.endpoint
    );

    let transport =
        ReqwestTransport::new(config.transport.clone()).context("building HTTP client")?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects =
        EffectRunner::new(Arc::new(transport), msg_tx).context("starting transport worker")?;

    let mut terminal = setup_terminal().context("initializing terminal")?;
    let mut app = App::new(UiState::new(config.transport.endpoint.to_string()));
    let result = app.run(&mut terminal, &effects, &msg_rx);
    restore_terminal(&mut terminal).context("restoring terminal")?;

    if let Err(err) = &result {
        client_error!("UI loop failed: {:#}", err);
    }
    client_info!("TorBot client exiting");
    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stderr))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

struct App {
    state: AppState,
    view: AppViewModel,
    ui: UiState,
}

impl App {
    fn new(ui: UiState) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self { state, view, ui }
    }

    fn run(
        &mut self,
        terminal: &mut Tui,
        effects: &EffectRunner,
        msg_rx: &mpsc::Receiver<Msg>,
    ) -> anyhow::Result<()> {
        self.draw(terminal)?;
        loop {
            let mut redraw = false;
            while let Ok(msg) = msg_rx.try_recv() {
                redraw |= self.dispatch(msg, effects);
            }
            if redraw {
                self.draw(terminal)?;
            }

            if !event::poll(TICK)? {
                continue;
            }
            let redraw = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match ui::input::map_key(&self.view, key) {
                        KeyAction::Dispatch(msg) => self.dispatch(msg, effects),
                        KeyAction::Scroll(delta) => self.scroll(delta),
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Ignore => false,
                    }
                }
                Event::Resize(_, _) => true,
                _ => false,
            };
            if redraw {
                self.draw(terminal)?;
            }
        }
    }

    /// Applies one message. Returns whether the screen needs a redraw.
    fn dispatch(&mut self, msg: Msg, effects: &EffectRunner) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, pending) = update(state, msg);
        effects.run(pending);
        let dirty = state.consume_dirty();
        self.state = state;
        if dirty {
            let was_results = matches!(self.view.screen, ScreenView::Results(_));
            self.view = self.state.view();
            if !was_results {
                self.ui.results_offset = 0;
            }
        }
        dirty
    }

    fn scroll(&mut self, delta: isize) -> bool {
        let ScreenView::Results(results) = &self.view.screen else {
            return false;
        };
        let before = self.ui.results_offset;
        self.ui.scroll(delta, results.rows.len());
        before != self.ui.results_offset
    }

    fn draw(&self, terminal: &mut Tui) -> io::Result<()> {
        terminal.draw(|frame| ui::render::render(frame, &self.view, &self.ui))?;
        Ok(())
    }
}
