//! Shared utilities for TUI views

use ratatui::layout::{Position, Rect};

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncate_at = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(truncate_at).collect();
        format!("{}...", truncated)
    }
}

/// Row and column just past the last character of `text`
fn text_end(text: &str) -> (u16, u16) {
    let row = text.split('\n').count().saturating_sub(1);
    let col = text.rsplit('\n').next().map_or(0, |line| line.chars().count());
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(col).unwrap_or(u16::MAX),
    )
}

/// Scroll offset `(rows, columns)` that keeps the end of `text` visible
/// inside the bordered `area`
pub fn text_scroll(text: &str, area: Rect) -> (u16, u16) {
    let (row, col) = text_end(text);
    let inner_height = area.height.saturating_sub(2).max(1);
    let inner_width = area.width.saturating_sub(2).max(1);
    (
        row.saturating_sub(inner_height - 1),
        col.saturating_sub(inner_width - 1),
    )
}

/// Cursor position after the last character of `text` rendered inside
/// the bordered `area` with the offset from [`text_scroll`]
pub fn text_cursor(text: &str, area: Rect) -> Position {
    let (row, col) = text_end(text);
    let (scroll_y, scroll_x) = text_scroll(text, area);
    Position::new(
        area.x.saturating_add(1).saturating_add(col - scroll_x),
        area.y.saturating_add(1).saturating_add(row - scroll_y),
    )
}
