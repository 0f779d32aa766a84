use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Rows of book spines stacked on shelves, drawn on the welcome screen. Each
/// row is repeated sideways to fill the available width.
const SHELF_ART: &[&str] = &[
    "|=|| |#|:|",
    "| ||~|#|:|",
    "|_||_|_|_|",
    "==========",
];

/// Repeat a short ASCII motif until it fills the requested width.
pub(crate) fn repeat_pattern_row(row: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if row.is_empty() {
        return " ".repeat(width);
    }
    let repeat_count = width / row.len() + 2;
    let mut repeated = row.repeat(repeat_count);
    repeated.truncate(width);
    repeated
}

/// Fill a `width` x `height` area with the bookshelf decoration.
pub(crate) fn build_shelf_lines(width: u16, height: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let height = height as usize;
    if width == 0 || height == 0 {
        return vec![Line::from("")];
    }

    let style = Style::default().fg(Color::DarkGray);
    (0..height)
        .map(|row_idx| {
            let base = SHELF_ART[row_idx % SHELF_ART.len()];
            Line::from(vec![Span::styled(repeat_pattern_row(base, width), style)])
        })
        .collect()
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_pattern_row_fills_exact_width() {
        assert_eq!(repeat_pattern_row("ab", 5), "ababa");
        assert_eq!(repeat_pattern_row("", 3), "   ");
        assert_eq!(repeat_pattern_row("ab", 0), "");
    }

    #[test]
    fn shelf_lines_cover_the_area() {
        let lines = build_shelf_lines(23, 6);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|line| line.width() == 23));
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
    }
}
