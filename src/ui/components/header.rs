//! Title bar with the contact count.

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the title centered and bold on `row`.
///
/// Returns the next free row.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = text_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.position_cursor(row, 1);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.put(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.put(&title);
    canvas.pad(cols.saturating_sub(padding + title_len));

    canvas.put(&theme.restore());
    row + 1
}
