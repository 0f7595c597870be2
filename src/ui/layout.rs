use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the frame into header, body, and footer regions.
///
/// Header and footer take three rows each; the body absorbs the rest and
/// collapses first when the terminal gets very short.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
