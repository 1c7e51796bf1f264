//! Search input box.

use crate::ui::helpers::{tail, text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Spaces left and right of the box.
const SEARCH_BOX_MARGIN: usize = 5;

const CURSOR: &str = "▏";

/// Draws a three-line box holding the query, or the placeholder while the
/// query is empty.
///
/// ```text
///      ┌──────────────────────┐
///      │ Search...            │
///      └──────────────────────┘
/// ```
///
/// The border takes the accent color and a cursor is drawn while the box has
/// focus. Returns the next free row.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    canvas.position_cursor(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.put(&theme.restore());

    let cursor = if search.is_focused { CURSOR } else { "" };
    let room = inner_width.saturating_sub(1 + text_width(cursor));
    let (text, text_style) = if search.query.is_empty() {
        (tail(search.placeholder, room), Theme::fg(&theme.colors.text_dim))
    } else {
        (tail(&search.query, room), Theme::fg(&theme.colors.text_normal))
    };
    let used = 1 + text_width(&text) + text_width(cursor);

    canvas.position_cursor(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put("│ ");
    if search.query.is_empty() {
        canvas.put(&Theme::fg(&theme.colors.text_normal));
        canvas.put(cursor);
        canvas.put(&text_style);
        canvas.put(&text);
    } else {
        canvas.put(&text_style);
        canvas.put(&text);
        canvas.put(cursor);
    }
    canvas.pad(inner_width.saturating_sub(used));
    canvas.put(&border);
    canvas.put("│");
    canvas.put(&theme.restore());

    canvas.position_cursor(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(&theme.restore());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(query: &str, is_focused: bool) -> String {
        let mut canvas = Canvas::new();
        let search = SearchBarInfo {
            query: query.to_string(),
            placeholder: "Search...",
            is_focused,
        };
        let next = render_search_bar(&mut canvas, 4, &search, &Theme::default(), 60);
        assert_eq!(next, 7);
        canvas.into_string()
    }

    #[test]
    fn shows_placeholder_while_query_is_empty() {
        let out = bar("", false);
        assert!(out.contains("Search..."));
        assert!(!out.contains(CURSOR));
    }

    #[test]
    fn shows_query_and_cursor_when_focused() {
        let out = bar("jan", true);
        assert!(out.contains("jan▏"));
        assert!(!out.contains("Search..."));
    }

    #[test]
    fn long_queries_keep_their_end_visible() {
        let query = format!("{}xyz", "a".repeat(100));
        let out = bar(&query, true);
        assert!(out.contains("axyz▏"));
    }
}
