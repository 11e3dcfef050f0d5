use crate::sorts::Mark;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,     // Green
    pub placed: Color,    // Green
    pub displaced: Color, // Red
    pub comment: Color,   // Grey
    pub gradients: [Color; 3],
    pub status_bg: Color,
    pub badge_idle: Color,
    pub badge_sorting: Color, // Orange
    pub badge_sorted: Color,
}

impl Theme {
    /// Colour of bar `index`, honouring any highlight for this frame
    pub fn bar_color(&self, index: usize, mark: Option<Mark>) -> Color {
        match mark {
            Some(Mark::Placed) => self.placed,
            Some(Mark::Displaced) => self.displaced,
            None => self.gradients[index % self.gradients.len()],
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(166, 227, 161),
    placed: Color::Rgb(0, 255, 0),
    displaced: Color::Rgb(255, 0, 0),
    comment: Color::Rgb(108, 112, 134),
    // Three shades of grey cycled across neighbouring bars
    gradients: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    status_bg: Color::Rgb(50, 50, 70),
    badge_idle: Color::Rgb(137, 180, 250),    // Blue
    badge_sorting: Color::Rgb(250, 179, 135), // Orange
    badge_sorted: Color::Rgb(166, 227, 161),  // Green
};
