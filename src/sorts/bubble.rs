//! Adjacent-pair bubble sort

use super::{Mark, SortDirection, SortStepper, Step};

/// Bubble sort yielding once per swap; comparisons that leave the pair alone
/// are consumed silently within the same call.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    direction: SortDirection,
    pass: usize,
    pair: usize,
}

impl BubbleSort {
    pub fn new(direction: SortDirection) -> Self {
        BubbleSort {
            direction,
            pass: 0,
            pair: 0,
        }
    }
}

impl<T: PartialOrd> SortStepper<T> for BubbleSort {
    fn step(&mut self, values: &mut [T]) -> Option<Step> {
        let len = values.len();
        loop {
            if self.pass + 1 >= len {
                return None;
            }
            // The last `pass` slots already hold their final values
            if self.pair + 1 >= len - self.pass {
                self.pass += 1;
                self.pair = 0;
                continue;
            }

            let j = self.pair;
            self.pair += 1;
            if self.direction.out_of_order(&values[j], &values[j + 1]) {
                values.swap(j, j + 1);
                return Some(Step::clear().mark(j, Mark::Placed).mark(j + 1, Mark::Displaced));
            }
        }
    }
}
