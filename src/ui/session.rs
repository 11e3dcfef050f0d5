//! Sort session state and the commands that drive it
//!
//! A [`Session`] holds the user's selections and, while sorting, the active
//! [`SortRun`]. The session is "sorting" exactly when a run exists, so
//! cancelling a sort is dropping the run.

use crate::sorts::{Algorithm, SortDirection, SortStepper, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// Commands understood by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Start,
    SetDirection(SortDirection),
    SelectAlgorithm(Algorithm),
    Quit,
}

impl Command {
    /// Map a key press to a command; letters are case-insensitive
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => Some(Command::Quit),
                'r' => Some(Command::Reset),
                'a' => Some(Command::SetDirection(SortDirection::Ascending)),
                'd' => Some(Command::SetDirection(SortDirection::Descending)),
                'i' => Some(Command::SelectAlgorithm(Algorithm::Insertion)),
                'b' => Some(Command::SelectAlgorithm(Algorithm::Bubble)),
                's' => Some(Command::SelectAlgorithm(Algorithm::Selection)),
                'm' => Some(Command::SelectAlgorithm(Algorithm::Merge)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Coarse state shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sorting,
    /// Idle after a run finished, until the next reset or start
    Sorted,
}

/// One sorting run: the stepper and how far it has got
pub struct SortRun {
    pub algorithm: Algorithm,
    pub direction: SortDirection,
    stepper: Box<dyn SortStepper<i32>>,
    pub steps: usize,
}

impl SortRun {
    pub fn new(algorithm: Algorithm, direction: SortDirection) -> Self {
        SortRun {
            algorithm,
            direction,
            stepper: algorithm.stepper(direction),
            steps: 0,
        }
    }

    /// Advance the stepper once, counting the step taken
    pub fn advance(&mut self, values: &mut [i32]) -> Option<Step> {
        let step = self.stepper.step(values)?;
        self.steps += 1;
        Some(step)
    }
}

impl fmt::Debug for SortRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRun")
            .field("algorithm", &self.algorithm)
            .field("direction", &self.direction)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

/// User selections plus the active run, if any
#[derive(Debug, Default)]
pub struct Session {
    pub algorithm: Algorithm,
    pub direction: SortDirection,
    pub run: Option<SortRun>,
    /// Steps taken by the last finished run
    pub last_run_steps: Option<usize>,
}

impl Session {
    pub fn is_sorting(&self) -> bool {
        self.run.is_some()
    }

    pub fn state(&self) -> SessionState {
        match (&self.run, self.last_run_steps) {
            (Some(_), _) => SessionState::Sorting,
            (None, Some(_)) => SessionState::Sorted,
            (None, None) => SessionState::Idle,
        }
    }

    /// Steps of the current run, or of the last finished one
    pub fn steps(&self) -> usize {
        match &self.run {
            Some(run) => run.steps,
            None => self.last_run_steps.unwrap_or(0),
        }
    }

    /// Begin a run with the current selections; false if already sorting
    pub fn start(&mut self) -> bool {
        if self.is_sorting() {
            return false;
        }
        self.run = Some(SortRun::new(self.algorithm, self.direction));
        self.last_run_steps = None;
        true
    }

    /// Drop any active run along with its progress
    pub fn cancel(&mut self) -> Option<SortRun> {
        self.last_run_steps = None;
        self.run.take()
    }

    /// Mark the active run as exhausted and return its step count
    pub fn finish(&mut self) -> Option<usize> {
        let run = self.run.take()?;
        self.last_run_steps = Some(run.steps);
        Some(run.steps)
    }

    /// Change direction; ignored while sorting
    pub fn set_direction(&mut self, direction: SortDirection) -> bool {
        if self.is_sorting() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Change algorithm; ignored while sorting
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.is_sorting() {
            return false;
        }
        self.algorithm = algorithm;
        true
    }
}
