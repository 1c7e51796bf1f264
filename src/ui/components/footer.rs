//! Keybinding hints.

use crate::ui::helpers::{render_centered, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the hints dimmed and centered on `row`. Text wider than the pane is
/// cut off.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let style = Theme::fg(&theme.colors.text_dim);
    render_centered(canvas, row, &footer.keybindings, &style, theme, cols);
    row + 1
}
