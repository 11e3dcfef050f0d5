//! Bar chart rendering
//!
//! The chart is a ratatui [`Canvas`] whose coordinate space is the logical
//! plot area of the [`ArrayModel`]: `x` spans the full surface width and `y`
//! spans the height left below the header. Each value becomes a filled
//! [`BarShape`] anchored at the bottom edge, so the terminal size only changes
//! the resolution of the chart, never its proportions.

use crate::model::ArrayModel;
use crate::sorts::Highlights;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Painter, Shape},
    Frame,
};

/// A solid rectangle rising from `y = 0` to `top`
#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub x: f64,
    pub width: f64,
    pub top: f64,
    pub color: Color,
}

impl Shape for BarShape {
    fn draw(&self, painter: &mut Painter) {
        let Some((left, top)) = painter.get_point(self.x, self.top) else {
            return;
        };
        let Some((right, bottom)) = painter.get_point(self.x + self.width, 0.0) else {
            return;
        };

        // Right edge belongs to the next bar; keep at least one column
        let right = right.max(left + 1);
        for y in top..=bottom {
            for x in left..right {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Build one shape per visible bar, clipped to the plot area
pub fn bar_shapes(model: &ArrayModel, highlights: &Highlights) -> Vec<BarShape> {
    let max_x = f64::from(model.width);
    let max_y = f64::from(model.plot_height());
    let block_width = f64::from(model.metrics().block_width);

    model
        .values
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| {
            let top = model.bar_height(value).min(max_y);
            if top <= 0.0 {
                return None;
            }
            let x = model.bar_x(index);
            if x >= max_x {
                return None;
            }
            Some(BarShape {
                x,
                width: block_width.min(max_x - x),
                top,
                color: DEFAULT_THEME.bar_color(index, highlights.get(&index).copied()),
            })
        })
        .collect()
}

/// Render the bars of `model` into `area`
pub fn render_chart(frame: &mut Frame, area: Rect, model: &ArrayModel, highlights: &Highlights) {
    let bars = bar_shapes(model, highlights);

    let canvas = Canvas::default()
        .background_color(DEFAULT_THEME.bg)
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, f64::from(model.width)])
        .y_bounds([0.0, f64::from(model.plot_height())])
        .paint(|ctx| {
            for bar in &bars {
                ctx.draw(bar);
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::Mark;

    #[test]
    fn test_shapes_follow_metrics() {
        let model = ArrayModel::new(vec![0, 50, 100], 800, 600, 100, 150);
        let shapes = bar_shapes(&model, &Highlights::default());

        // The minimum value has no visible height
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].x, 50.0 + 233.0);
        assert_eq!(shapes[0].top, 200.0);
        assert_eq!(shapes[1].top, 400.0);
        assert_eq!(shapes[1].color, DEFAULT_THEME.gradients[2]);
    }

    #[test]
    fn test_highlight_overrides_gradient() {
        let model = ArrayModel::new(vec![1, 2, 3], 800, 600, 100, 150);
        let mut highlights = Highlights::default();
        highlights.insert(1, Mark::Placed);
        highlights.insert(2, Mark::Displaced);

        let shapes = bar_shapes(&model, &highlights);
        assert_eq!(shapes[0].color, DEFAULT_THEME.placed);
        assert_eq!(shapes[1].color, DEFAULT_THEME.displaced);
    }
}
