//! Frame rendering
//!
//! A frame is laid out top to bottom as:
//!
//! - [`header`]: title ("<Algorithm> - Ascending/Descending") and two help lines
//! - [`chart`]: the bars, drawn on a canvas in logical surface coordinates
//! - [`status`]: step counter, status message and session badge
//!
//! [`render_frame`] is the single entry point used by the controller. A
//! [`FrameKind::Full`] frame clears the whole terminal first; a
//! [`FrameKind::Step`] frame, drawn after each sorting step, clears only the
//! plot area. ratatui diffs every frame against the previous one, so the
//! unchanged header is never re-sent to the terminal during a run.

pub mod chart;
pub mod header;
pub mod status;

pub use chart::{render_chart, BarShape};
pub use header::{render_header, title_text};
pub use status::{render_status_bar, StatusRenderData};

use crate::model::ArrayModel;
use crate::sorts::{Highlights, SortDirection};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Clear},
    Frame,
};

/// Rows taken by the header: title, spacer, two help lines, spacer
const HEADER_ROWS: u16 = 5;

/// What a frame has to clear before drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Idle redraw of the whole screen
    Full,
    /// Redraw after a sorting step; only the plot area is cleared
    Step,
}

/// Screen regions of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub header: Rect,
    pub plot: Rect,
    pub status: Rect,
}

impl FrameLayout {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        FrameLayout {
            header: chunks[0],
            plot: chunks[1],
            status: chunks[2],
        }
    }
}

/// Draw one frame of the visualizer
#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    frame: &mut Frame,
    model: &ArrayModel,
    algorithm_name: &str,
    direction: SortDirection,
    highlights: &Highlights,
    kind: FrameKind,
    status: &StatusRenderData<'_>,
) {
    let area = frame.area();
    let layout = FrameLayout::split(area);
    let background = Block::default().style(Style::default().bg(DEFAULT_THEME.bg));

    match kind {
        FrameKind::Full => {
            frame.render_widget(Clear, area);
            frame.render_widget(background, area);
        }
        FrameKind::Step => {
            frame.render_widget(Clear, layout.plot);
            frame.render_widget(background, layout.plot);
        }
    }

    render_header(frame, layout.header, algorithm_name, direction);
    render_chart(frame, layout.plot, model, highlights);
    render_status_bar(frame, layout.status, status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::session::SessionState;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_full_frame_shows_title_and_help() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let model = ArrayModel::new(vec![3, 1, 2], 800, 600, 100, 150);
        let status = StatusRenderData {
            message: "Ready",
            steps: 0,
            state: SessionState::Idle,
        };

        terminal
            .draw(|f| {
                render_frame(
                    f,
                    &model,
                    "Merge Sort",
                    SortDirection::Descending,
                    &Highlights::default(),
                    FrameKind::Full,
                    &status,
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Merge Sort - Descending"));
        assert!(text.contains(header::CONTROLS_HELP));
        assert!(text.contains(header::ALGORITHMS_HELP));
        assert!(text.contains("IDLE"));
    }

    #[test]
    fn test_step_frame_paints_highlight() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let model = ArrayModel::new(vec![0, 100], 800, 600, 100, 150);
        let mut highlights = Highlights::default();
        highlights.insert(1, crate::sorts::Mark::Placed);
        let status = StatusRenderData {
            message: "Sorting...",
            steps: 1,
            state: SessionState::Sorting,
        };

        terminal
            .draw(|f| {
                render_frame(
                    f,
                    &model,
                    "Bubble Sort",
                    SortDirection::Ascending,
                    &highlights,
                    FrameKind::Step,
                    &status,
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let painted = buffer
            .content()
            .iter()
            .any(|cell| cell.fg == DEFAULT_THEME.placed || cell.bg == DEFAULT_THEME.placed);
        assert!(painted);
        assert!(buffer_text(&terminal).contains("Bubble Sort - Ascending"));
    }

    #[test]
    fn test_layout_reserves_header_and_status() {
        let layout = FrameLayout::split(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, HEADER_ROWS);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.plot.height, 24 - HEADER_ROWS - 1);
    }
}
