// Property checks for the step-wise sorting algorithms

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortviz::sorts::{Algorithm, SortDirection, SortStepper};

const DIRECTIONS: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

fn random_inputs(seed: u64) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut inputs = vec![
        Vec::new(),
        vec![1],
        vec![2, 1],
        vec![7; 12],
        (0..30).collect(),
        (0..30).rev().collect(),
    ];

    for size in [3, 8, 17, 50, 101] {
        for _ in 0..4 {
            inputs.push((0..size).map(|_| rng.gen_range(0..=100)).collect());
        }
        // Heavy duplicates
        inputs.push((0..size).map(|_| rng.gen_range(0..=3)).collect());
    }

    inputs
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

#[test]
fn test_draining_sorts_every_input() {
    for input in random_inputs(1) {
        for algorithm in Algorithm::ALL {
            for direction in DIRECTIONS {
                let mut values = input.clone();
                let mut stepper = algorithm.stepper(direction);
                stepper.run_to_completion(&mut values);

                assert!(
                    direction.is_sorted(&values),
                    "{} {} left {:?} unsorted (input {:?})",
                    algorithm,
                    direction,
                    values,
                    input
                );
                // Same multiset: nothing added, lost or duplicated
                assert_eq!(sorted_copy(&values), sorted_copy(&input));
            }
        }
    }
}

#[test]
fn test_quadratic_sorts_stay_within_worst_case() {
    for input in random_inputs(2) {
        let n = input.len();
        let pairs = n * n.saturating_sub(1) / 2;

        for direction in DIRECTIONS {
            let mut values = input.clone();
            let bubble_steps = Algorithm::Bubble.stepper(direction).run_to_completion(&mut values);
            assert!(bubble_steps <= pairs);

            let mut values = input.clone();
            let insertion_steps =
                Algorithm::Insertion.stepper(direction).run_to_completion(&mut values);
            assert!(insertion_steps <= pairs);

            // Both count inversions, so they agree exactly
            assert_eq!(bubble_steps, insertion_steps);

            let mut values = input.clone();
            let selection_steps =
                Algorithm::Selection.stepper(direction).run_to_completion(&mut values);
            assert_eq!(selection_steps, n);
        }
    }
}

#[test]
fn test_merge_sort_short_inputs_are_untouched() {
    for input in [Vec::new(), vec![5]] {
        for direction in DIRECTIONS {
            let mut values = input.clone();
            let steps = Algorithm::Merge.stepper(direction).run_to_completion(&mut values);
            assert_eq!(steps, 0);
            assert_eq!(values, input);
        }
    }
}

#[test]
fn test_merge_sort_steps_match_merge_sizes() {
    // Every merge of a range of length k writes k elements and then clears
    fn expected(len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let mid = len / 2;
        expected(mid) + expected(len - mid) + len + 1
    }

    let mut rng = StdRng::seed_from_u64(3);
    for len in 0..40 {
        let mut values: Vec<i32> = (0..len).map(|_| rng.gen_range(0..=100)).collect();
        let steps = Algorithm::Merge
            .stepper(SortDirection::Ascending)
            .run_to_completion(&mut values);
        assert_eq!(steps, expected(len), "length {}", len);
    }
}

#[test]
fn test_every_step_mutates_or_clears() {
    let mut rng = StdRng::seed_from_u64(4);
    let input: Vec<i32> = (0..25).map(|_| rng.gen_range(0..=100)).collect();

    for algorithm in Algorithm::ALL {
        let mut values = input.clone();
        let mut stepper = algorithm.stepper(SortDirection::Descending);
        while let Some(step) = stepper.step(&mut values) {
            assert!(step.highlights.keys().all(|&index| index < values.len()));
            if algorithm != Algorithm::Merge {
                assert!(!step.highlights.is_empty());
            }
        }
        assert!(stepper.step(&mut values).is_none());
    }
}
