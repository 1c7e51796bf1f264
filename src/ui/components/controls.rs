//! "Add Contact" and theme toggle controls.

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

/// Draws the control bar on `row` with the key for each control.
///
/// Controls are bold while the list has focus, since that is when their keys
/// are live. Returns the next free row.
pub fn render_controls(canvas: &mut Canvas, row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    let line = format!(
        "  [a] {}    [t] {}",
        controls.add_label, controls.theme_toggle_label
    );
    let line = truncate(&line, cols);

    canvas.position_cursor(row, 1);
    if controls.is_focused {
        canvas.put(Theme::bold());
    }
    canvas.put(&Theme::fg(&theme.colors.control_fg));
    canvas.put(&line);
    canvas.put(&theme.restore());
    canvas.pad(cols.saturating_sub(text_width(&line)));

    row + 1
}
