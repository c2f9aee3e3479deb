//! Main TUI application state machine.
//!
//! One interaction cycle at a time: the event loop blocks on user input,
//! and a submission runs the pipeline to completion before the result
//! screen renders. The only shared state is the artifact bundle loaded
//! once at startup.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::ArtifactBundle;
use crate::application::PredictionService;
use crate::ports::SeverityModel;

use super::ui::{
    form::{render_form, CaseFormState},
    render_disclaimer,
    result::{render_result, ResultState},
};

/// Current screen/view in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Result,
}

/// Main application state.
pub struct App<M: SeverityModel> {
    screen: Screen,
    should_quit: bool,
    service: PredictionService<M>,
    form: CaseFormState,
    result: ResultState,
}

impl App<ArtifactBundle> {
    /// Create an application over the artifacts in the default model
    /// directory (`model`, overridable via `FAERSCOPE_MODEL_DIR`).
    ///
    /// # Errors
    /// Refuses to start when the artifacts are missing or fail validation;
    /// a broken bundle would only fail later, mid-request.
    pub fn new() -> Result<Self> {
        let model_dir =
            std::env::var("FAERSCOPE_MODEL_DIR").unwrap_or_else(|_| "model".to_string());
        let dir = std::path::Path::new(&model_dir);

        if !dir.exists() {
            return Err(anyhow!(
                "Model directory not found at {:?}. Set FAERSCOPE_MODEL_DIR to a directory containing the five artifact files.",
                dir
            ));
        }

        let bundle = ArtifactBundle::load(dir)
            .map_err(|e| anyhow!("Failed to load model artifacts from {:?}: {}", dir, e))?;

        Ok(Self::with_service(PredictionService::new(Arc::new(bundle))))
    }
}

impl<M: SeverityModel> App<M> {
    /// Create the application with an injected prediction service.
    #[must_use]
    pub fn with_service(service: PredictionService<M>) -> Self {
        Self {
            screen: Screen::Form,
            should_quit: false,
            service,
            form: CaseFormState::default(),
            result: ResultState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                match self.screen {
                    Screen::Form => render_form(f, chunks[0], &self.form),
                    Screen::Result => render_result(f, chunks[0], &self.result),
                }

                render_disclaimer(f, chunks[1]);
            })?;

            // Short poll to stay responsive.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.form.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form.next_field();
            }
            KeyCode::Left => {
                self.form.cycle(-1);
            }
            KeyCode::Right => {
                self.form.cycle(1);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.form.load_sample();
            }
            KeyCode::Char(c) => {
                self.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.form.delete_char();
            }
            KeyCode::Delete => {
                self.form.clear_field();
            }
            KeyCode::Enter => {
                self.submit_case();
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                self.screen = Screen::Form;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form = CaseFormState::default();
                self.screen = Screen::Form;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn submit_case(&mut self) {
        match self.form.to_case_record() {
            Ok(record) => {
                match self.service.predict(record) {
                    Ok(prediction) => {
                        self.result = ResultState::Complete { prediction };
                    }
                    Err(e) => {
                        // Build-time contract violation, not user error.
                        tracing::error!("prediction pipeline failed: {e}");
                        self.result = ResultState::Error {
                            message: e.to_string(),
                        };
                    }
                }
                self.screen = Screen::Result;
            }
            Err(warning) => {
                self.form.warning = Some(warning);
            }
        }
    }
}
