//! Step-wise sorting algorithms
//!
//! Every algorithm is an explicit state machine implementing [`SortStepper`].
//! A call to [`SortStepper::step`] performs exactly one visible mutation of
//! the slice (a swap, a shift or a placement) and returns the [`Step`]
//! describing which bars to highlight. Loop indices and partial merges live in
//! the stepper itself, so the caller can render between steps and resume on
//! the next frame. Dropping the stepper cancels the sort.
//!
//! - [`insertion`]: one step per shift
//! - [`bubble`]: one step per swap
//! - [`selection`]: one step per position, swap or not
//! - [`merge`]: one step per element written, plus one after each merge

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use selection::SelectionSort;

use rustc_hash::FxHashMap;
use std::fmt;

/// Sort order requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// True when `earlier` must move behind `later` for this direction
    pub fn out_of_order<T: PartialOrd>(self, earlier: &T, later: &T) -> bool {
        match self {
            SortDirection::Ascending => earlier > later,
            SortDirection::Descending => earlier < later,
        }
    }

    /// True when `candidate` should replace `current` as the extreme of a scan
    pub fn prefers<T: PartialOrd>(self, candidate: &T, current: &T) -> bool {
        self.out_of_order(current, candidate)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }

    /// Whether `values` is ordered for this direction
    pub fn is_sorted<T: PartialOrd>(self, values: &[T]) -> bool {
        values.windows(2).all(|pair| !self.out_of_order(&pair[0], &pair[1]))
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four animated algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Insertion,
    #[default]
    Bubble,
    Selection,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Fresh stepper for this algorithm, positioned before its first step
    pub fn stepper<T>(self, direction: SortDirection) -> Box<dyn SortStepper<T>>
    where
        T: PartialOrd + Copy + 'static,
    {
        match self {
            Algorithm::Insertion => Box::new(InsertionSort::new(direction)),
            Algorithm::Bubble => Box::new(BubbleSort::new(direction)),
            Algorithm::Selection => Box::new(SelectionSort::new(direction)),
            Algorithm::Merge => Box::new(MergeSort::new(direction)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a highlighted bar was touched by the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Value written into its (current) destination
    Placed,
    /// Value moved out of the way or compared against
    Displaced,
}

/// Index to mark overrides for a single frame
pub type Highlights = FxHashMap<usize, Mark>;

/// One visible mutation of the array
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub highlights: Highlights,
}

impl Step {
    /// A step that only clears leftover highlights
    pub fn clear() -> Self {
        Step::default()
    }

    /// Mark `index`; a later mark on the same index replaces the earlier one
    pub fn mark(mut self, index: usize, mark: Mark) -> Self {
        self.highlights.insert(index, mark);
        self
    }

    /// Mark `index` only when it exists
    pub fn mark_opt(self, index: Option<usize>, mark: Mark) -> Self {
        match index {
            Some(index) => self.mark(index, mark),
            None => self,
        }
    }
}

/// A sort that can be suspended after every visible mutation
pub trait SortStepper<T> {
    /// Advance to the next mutation of `values`.
    ///
    /// Returns `None` once the sort is finished, and keeps returning `None`.
    /// `values` must be the same slice, unchanged by anyone else, on every
    /// call of one run.
    fn step(&mut self, values: &mut [T]) -> Option<Step>;

    /// Drain every remaining step and return how many were taken
    fn run_to_completion(&mut self, values: &mut [T]) -> usize {
        let mut steps = 0;
        while self.step(values).is_some() {
            steps += 1;
        }
        steps
    }
}
