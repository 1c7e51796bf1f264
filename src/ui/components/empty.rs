//! Message shown in place of an empty list.

use crate::ui::helpers::{render_centered, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the message on `row` and the subtitle below it, both centered.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_style = Theme::fg(&theme.colors.empty_state_fg);
    render_centered(canvas, row, &empty.message, &message_style, theme, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(canvas, row + 1, &empty.subtitle, &subtitle_style, theme, cols);
}
