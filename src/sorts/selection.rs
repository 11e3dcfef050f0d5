//! Selection sort

use super::{Mark, SortDirection, SortStepper, Step};

/// Selection sort yielding once per position, including positions whose
/// extreme is already in place.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    direction: SortDirection,
    position: usize,
}

impl SelectionSort {
    pub fn new(direction: SortDirection) -> Self {
        SelectionSort {
            direction,
            position: 0,
        }
    }
}

impl<T: PartialOrd> SortStepper<T> for SelectionSort {
    fn step(&mut self, values: &mut [T]) -> Option<Step> {
        let i = self.position;
        if i >= values.len() {
            return None;
        }

        // First minimum when ascending, first maximum when descending
        let mut extreme = i;
        for j in i + 1..values.len() {
            if self.direction.prefers(&values[j], &values[extreme]) {
                extreme = j;
            }
        }

        values.swap(i, extreme);
        self.position += 1;
        Some(Step::clear().mark(i, Mark::Placed).mark(extreme, Mark::Displaced))
    }
}
