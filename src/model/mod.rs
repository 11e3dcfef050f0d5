//! Array model
//!
//! [`ArrayModel`] owns the sequence being sorted together with the
//! [`Metrics`] used to lay it out as bars on the logical drawing surface.
//!
//! # Metrics
//!
//! With `n` values on a `width × height` surface:
//!
//! - block width  = `round((width - side_pad) / n)`
//! - block height = `floor((height - top_pad) / (max - min))`
//! - start x      = `side_pad / 2`
//!
//! When every value is equal `max` is bumped by one so the block height stays
//! finite. The sequence is only reordered while a sort runs, so metrics are
//! derived on reset and never during a run.

use rand::Rng;

/// Layout derived from the current sequence and surface size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub min_value: i32,
    /// Bumped past `min_value` when all values are equal; widened so the
    /// bump cannot overflow at `i32::MAX`
    pub max_value: i64,
    pub block_width: u32,
    pub block_height: u32,
    pub start_x: u32,
}

/// The working sequence and the surface it is drawn onto
#[derive(Debug, Clone)]
pub struct ArrayModel {
    pub values: Vec<i32>,
    pub width: u32,
    pub height: u32,
    side_pad: u32,
    top_pad: u32,
    metrics: Metrics,
}

impl ArrayModel {
    /// Build a model around an existing sequence and derive its metrics
    pub fn new(values: Vec<i32>, width: u32, height: u32, side_pad: u32, top_pad: u32) -> Self {
        let mut model = ArrayModel {
            values,
            width,
            height,
            side_pad,
            top_pad,
            metrics: Metrics {
                min_value: 0,
                max_value: 1,
                block_width: 0,
                block_height: 0,
                start_x: side_pad / 2,
            },
        };
        model.metrics = model.recompute_metrics(width, height);
        model
    }

    /// `count` independent draws from `[min, max]` using the thread RNG
    pub fn initialize(count: usize, min: i32, max: i32) -> Vec<i32> {
        Self::initialize_with(&mut rand::thread_rng(), count, min, max)
    }

    /// Same as [`ArrayModel::initialize`] with an explicit RNG.
    ///
    /// `min > max` panics inside `gen_range`; callers validate the range first.
    pub fn initialize_with<R: Rng>(rng: &mut R, count: usize, min: i32, max: i32) -> Vec<i32> {
        (0..count).map(|_| rng.gen_range(min..=max)).collect()
    }

    /// Replace the sequence and re-derive metrics for the current surface
    pub fn set_values(&mut self, values: Vec<i32>) {
        self.values = values;
        self.metrics = self.recompute_metrics(self.width, self.height);
    }

    /// Regenerate a fresh random sequence of `count` values in `[min, max]`
    pub fn reset<R: Rng>(&mut self, rng: &mut R, count: usize, min: i32, max: i32) {
        let values = Self::initialize_with(rng, count, min, max);
        self.set_values(values);
    }

    /// Derive block sizing for the given surface from the current values
    pub fn recompute_metrics(&self, width: u32, height: u32) -> Metrics {
        let min_value = self.values.iter().copied().min().unwrap_or(0);
        let mut max_value = i64::from(self.values.iter().copied().max().unwrap_or(0));
        if max_value == i64::from(min_value) {
            max_value += 1;
        }

        let plot_width = f64::from(width.saturating_sub(self.side_pad));
        let plot_height = f64::from(height.saturating_sub(self.top_pad));

        let block_width = if self.values.is_empty() {
            0
        } else {
            // Ties round to even: 12.5 gives 12
            (plot_width / self.values.len() as f64).round_ties_even() as u32
        };

        let span = max_value as f64 - f64::from(min_value);
        let block_height = (plot_height / span).floor() as u32;

        Metrics {
            min_value,
            max_value,
            block_width,
            block_height,
            start_x: self.side_pad / 2,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Left edge of bar `index` in logical coordinates
    pub fn bar_x(&self, index: usize) -> f64 {
        f64::from(self.metrics.start_x) + index as f64 * f64::from(self.metrics.block_width)
    }

    /// Visible height of a bar holding `value`, measured up from the bottom
    pub fn bar_height(&self, value: i32) -> f64 {
        let above_min = f64::from(value) - f64::from(self.metrics.min_value);
        (above_min * f64::from(self.metrics.block_height)).max(0.0)
    }

    /// Height of the plot area below the header
    pub fn plot_height(&self) -> u32 {
        self.height.saturating_sub(self.top_pad)
    }
}
