//! Rect arithmetic shared by screens and overlays.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A popup covering the given percentages of `area`, centred.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}

/// A centred column at most `max_width` wide, like a phone screen on a
/// wide terminal.
pub fn center_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Stack rows of fixed height top to bottom, scrolled so that row
/// `focused` is fully visible. Rows that do not fit get `None`.
pub fn stack_rows(area: Rect, heights: &[u16], focused: usize) -> Vec<Option<Rect>> {
    let focused = focused.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < focused && heights[first..=focused].iter().sum::<u16>() > area.height {
        first += 1;
    }

    let mut y = area.y;
    let bottom = area.y + area.height;
    heights
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            if i < first || y + h > bottom {
                return None;
            }
            let rect = Rect::new(area.x, y, area.width, h);
            y += h;
            Some(rect)
        })
        .collect()
}
