//! Main TUI application state and event loop

use crate::config::Config;
use crate::errors::AppError;
use crate::model::ArrayModel;
use crate::sorts::Highlights;
use crate::ui::panes::{self, FrameKind, StatusRenderData};
use crate::ui::session::{Command, Session};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::Instant;
use tracing::{debug, info};

/// The controller: owns the model and the session, drives one step per tick
pub struct App {
    pub config: Config,

    /// The array being visualized
    pub model: ArrayModel,

    /// Selections and the active run
    pub session: Session,

    /// Highlights from the most recent step, cleared on the next full frame
    pub highlights: Highlights,

    /// What the next draw has to clear
    pub frame_kind: FrameKind,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app with a freshly generated array
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Same as [`App::new`] with an explicit RNG for the first array
    pub fn with_rng<R: Rng>(config: Config, rng: &mut R) -> Result<Self, AppError> {
        config.validate()?;

        let values = ArrayModel::initialize_with(
            rng,
            config.element_count,
            config.min_value,
            config.max_value,
        );
        let model = ArrayModel::new(
            values,
            config.width,
            config.height,
            config.side_pad,
            config.top_pad,
        );

        Ok(App {
            config,
            model,
            session: Session::default(),
            highlights: Highlights::default(),
            frame_kind: FrameKind::Full,
            should_quit: false,
            status_message: String::from("Ready!"),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let tick = self.config.tick_interval();
        let tick_ms = tick.as_millis() as u64;
        info!(tick_ms, elements = self.model.len(), "event loop started");

        loop {
            let frame_start = Instant::now();

            self.tick();
            terminal.draw(|f| self.render(f))?;

            // Poll until the frame budget is spent so input stays responsive
            loop {
                let remaining = tick.saturating_sub(frame_start.elapsed());
                if !event::poll(remaining)? {
                    break;
                }
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
                if self.should_quit {
                    break;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("event loop stopped");
        Ok(())
    }

    /// Advance the active run by one step, or prepare an idle redraw
    pub fn tick(&mut self) {
        let Some(run) = self.session.run.as_mut() else {
            self.highlights.clear();
            self.frame_kind = FrameKind::Full;
            return;
        };

        match run.advance(&mut self.model.values) {
            Some(step) => {
                self.highlights = step.highlights;
                self.frame_kind = FrameKind::Step;
            }
            None => {
                let algorithm = run.algorithm;
                let direction = run.direction;
                let steps = self.session.finish().unwrap_or(0);
                info!(%algorithm, %direction, steps, "sort finished");
                self.status_message = format!("Sorted in {} steps", steps);
                self.highlights.clear();
                self.frame_kind = FrameKind::Full;
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let status = StatusRenderData {
            message: &self.status_message,
            steps: self.session.steps(),
            state: self.session.state(),
        };

        panes::render_frame(
            frame,
            &self.model,
            self.session.algorithm.name(),
            self.session.direction,
            &self.highlights,
            self.frame_kind,
            &status,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(command) = Command::from_key(key) {
            self.dispatch(command);
        }
    }

    /// Apply a command to the session
    pub fn dispatch(&mut self, command: Command) {
        self.dispatch_with_rng(command, &mut rand::thread_rng());
    }

    /// Same as [`App::dispatch`]; `rng` is only used by [`Command::Reset`]
    pub fn dispatch_with_rng<R: Rng>(&mut self, command: Command, rng: &mut R) {
        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::Reset => {
                if let Some(run) = self.session.cancel() {
                    info!(algorithm = %run.algorithm, steps = run.steps, "sort cancelled by reset");
                }
                self.model.reset(
                    rng,
                    self.config.element_count,
                    self.config.min_value,
                    self.config.max_value,
                );
                self.highlights.clear();
                self.status_message = "Reset".to_string();
                info!(elements = self.model.len(), "array regenerated");
            }
            Command::Start => {
                if self.session.start() {
                    self.status_message = "Sorting...".to_string();
                    info!(
                        algorithm = %self.session.algorithm,
                        direction = %self.session.direction,
                        "sort started"
                    );
                } else {
                    debug!("start ignored: already sorting");
                }
            }
            Command::SetDirection(direction) => {
                if self.session.set_direction(direction) {
                    self.status_message = format!("Direction: {}", direction);
                } else {
                    self.ignored(command);
                }
            }
            Command::SelectAlgorithm(algorithm) => {
                if self.session.select_algorithm(algorithm) {
                    self.status_message = format!("Algorithm: {}", algorithm);
                } else {
                    self.ignored(command);
                }
            }
        }
    }

    fn ignored(&mut self, command: Command) {
        debug!(?command, "ignored while sorting");
        self.status_message = "Ignored while sorting".to_string();
    }
}
