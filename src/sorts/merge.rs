//! Top-down merge sort over index ranges of a single buffer
//!
//! The recursion is unrolled into an explicit task stack so the sort can be
//! suspended in the middle of any merge. Ranges are split at `len / 2` and the
//! left half is always finished before the right half, which reproduces the
//! visiting order of the recursive formulation.
//!
//! Each merge copies its two (already sorted) halves and writes the merged
//! result back into `values[lo..hi]`, one element per step. After the last
//! element of a merge is written an extra step with no highlights is emitted
//! so the final placement mark does not linger into the next merge.

use super::{Mark, SortDirection, SortStepper, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Sort `lo..hi`
    Sort { lo: usize, hi: usize },
    /// Merge the sorted runs `lo..mid` and `mid..hi`
    Merge { lo: usize, mid: usize, hi: usize },
}

/// A merge in progress
#[derive(Debug, Clone)]
struct ActiveMerge<T> {
    left: Vec<T>,
    right: Vec<T>,
    i: usize,
    j: usize,
    /// Next index of `values` to write
    out: usize,
    hi: usize,
}

impl<T: PartialOrd + Copy> ActiveMerge<T> {
    fn new(values: &[T], lo: usize, mid: usize, hi: usize) -> Self {
        ActiveMerge {
            left: values[lo..mid].to_vec(),
            right: values[mid..hi].to_vec(),
            i: 0,
            j: 0,
            out: lo,
            hi,
        }
    }

    fn is_complete(&self) -> bool {
        self.out >= self.hi
    }

    /// Write the next merged element and return the index written
    fn write_next(&mut self, values: &mut [T], direction: SortDirection) -> usize {
        let take_right = match (self.left.get(self.i), self.right.get(self.j)) {
            (Some(left), Some(right)) => direction.out_of_order(left, right),
            (Some(_), None) => false,
            _ => true,
        };

        if take_right {
            values[self.out] = self.right[self.j];
            self.j += 1;
        } else {
            values[self.out] = self.left[self.i];
            self.i += 1;
        }

        let written = self.out;
        self.out += 1;
        written
    }
}

/// Merge sort yielding once per element written and once after every merge
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    direction: SortDirection,
    tasks: Vec<Task>,
    active: Option<ActiveMerge<T>>,
    started: bool,
}

impl<T> MergeSort<T> {
    pub fn new(direction: SortDirection) -> Self {
        MergeSort {
            direction,
            tasks: Vec::new(),
            active: None,
            started: false,
        }
    }
}

impl<T: PartialOrd + Copy> SortStepper<T> for MergeSort<T> {
    fn step(&mut self, values: &mut [T]) -> Option<Step> {
        if !self.started {
            self.started = true;
            self.tasks.push(Task::Sort {
                lo: 0,
                hi: values.len(),
            });
        }

        loop {
            if let Some(merge) = self.active.as_mut() {
                if !merge.is_complete() {
                    let written = merge.write_next(values, self.direction);
                    return Some(Step::clear().mark(written, Mark::Placed));
                }
                self.active = None;
                return Some(Step::clear());
            }

            match self.tasks.pop()? {
                Task::Sort { lo, hi } => {
                    if hi - lo > 1 {
                        let mid = lo + (hi - lo) / 2;
                        // Stack order: left sort runs first, merge runs last
                        self.tasks.push(Task::Merge { lo, mid, hi });
                        self.tasks.push(Task::Sort { lo: mid, hi });
                        self.tasks.push(Task::Sort { lo, hi: mid });
                    }
                }
                Task::Merge { lo, mid, hi } => {
                    self.active = Some(ActiveMerge::new(values, lo, mid, hi));
                }
            }
        }
    }
}
