//! Title and help lines above the chart

use crate::sorts::SortDirection;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const CONTROLS_HELP: &str =
    "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
pub const ALGORITHMS_HELP: &str =
    "I - Insertion Sort | B - Bubble Sort | S - Selection Sort | M - Merge Sort";

/// "<Algorithm> - Ascending" / "<Algorithm> - Descending"
pub fn title_text(algorithm_name: &str, direction: SortDirection) -> String {
    format!("{} - {}", algorithm_name, direction.label())
}

/// Render the title line followed by the two help lines
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    algorithm_name: &str,
    direction: SortDirection,
) {
    let help_style = Style::default().fg(DEFAULT_THEME.fg);

    let lines = vec![
        Line::styled(
            title_text(algorithm_name, direction),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(CONTROLS_HELP, help_style),
        Line::styled(ALGORITHMS_HELP, help_style),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}
