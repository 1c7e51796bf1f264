//! Add/edit dialog drawn over the list.

use crate::ui::helpers::{tail, text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

const MAX_DIALOG_WIDTH: usize = 48;

/// Draws the dialog box with its top edge on `row`, centered horizontally.
///
/// ```text
/// ┌─ Add Contact ──────────────┐
/// │ Enter name:                │
/// │ > Ann Lee▏                 │
/// └────────────────────────────┘
/// ```
///
/// Returns the row below the box.
pub fn render_prompt(canvas: &mut Canvas, row: usize, prompt: &PromptInfo, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(4).min(MAX_DIALOG_WIDTH);
    let inner_width = width.saturating_sub(2);
    let left = cols.saturating_sub(width) / 2 + 1;
    let border = Theme::fg(&theme.colors.search_bar_border);

    let title = truncate(&format!(" {} ", prompt.title), inner_width.saturating_sub(1));
    canvas.position_cursor(row, left);
    canvas.put(&border);
    canvas.put("┌─");
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.header_fg));
    canvas.put(&title);
    canvas.put(&theme.restore());
    canvas.put(&border);
    canvas.put(&"─".repeat(inner_width.saturating_sub(1 + text_width(&title))));
    canvas.put("┐");

    let label = truncate(&format!(" {}", prompt.label), inner_width);
    canvas.position_cursor(row + 1, left);
    canvas.put("│");
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.put(&label);
    canvas.pad(inner_width.saturating_sub(text_width(&label)));
    canvas.put(&border);
    canvas.put("│");

    let input = tail(&prompt.input, inner_width.saturating_sub(4));
    canvas.position_cursor(row + 2, left);
    canvas.put("│");
    canvas.put(&Theme::fg(&theme.colors.text_normal));
    canvas.put(" > ");
    canvas.put(&input);
    canvas.put("▏");
    canvas.pad(inner_width.saturating_sub(4 + text_width(&input)));
    canvas.put(&border);
    canvas.put("│");

    canvas.position_cursor(row + 3, left);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(&theme.restore());

    row + 4
}
