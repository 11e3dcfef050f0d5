//! Shift-based insertion sort

use super::{Mark, SortDirection, SortStepper, Step};

/// Insertion sort yielding once per shift.
///
/// `outer` is the index of the element currently being inserted and `pos`
/// is where that element sits right now; it walks left one slot per step.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    direction: SortDirection,
    outer: usize,
    pos: usize,
    current: Option<T>,
}

impl<T> InsertionSort<T> {
    pub fn new(direction: SortDirection) -> Self {
        InsertionSort {
            direction,
            outer: 0,
            pos: 0,
            current: None,
        }
    }
}

impl<T: PartialOrd + Copy> SortStepper<T> for InsertionSort<T> {
    fn step(&mut self, values: &mut [T]) -> Option<Step> {
        loop {
            if let Some(current) = self.current {
                if self.pos > 0 && self.direction.out_of_order(&values[self.pos - 1], &current) {
                    values[self.pos] = values[self.pos - 1];
                    self.pos -= 1;
                    values[self.pos] = current;
                    return Some(
                        Step::clear()
                            .mark_opt(self.pos.checked_sub(1), Mark::Placed)
                            .mark(self.pos, Mark::Displaced),
                    );
                }
            }

            if self.outer + 1 >= values.len() {
                self.current = None;
                return None;
            }
            self.outer += 1;
            self.pos = self.outer;
            self.current = Some(values[self.outer]);
        }
    }
}
