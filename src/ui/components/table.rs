//! Contact list rows.
//!
//! Each row reads `{name} - {phone}`. The selected row also carries its
//! Delete and Edit controls, right-aligned:
//!
//! ```text
//!  John Doe - 123456789                              Delete  Edit
//!  Jane Smith - 987654321
//! ```

use crate::ui::helpers::{self, text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const DELETE_LABEL: &str = "Delete";
const EDIT_LABEL: &str = "Edit";

/// Columns taken by the row controls, trailing space included.
const CONTROLS_WIDTH: usize = DELETE_LABEL.len() + 2 + EDIT_LABEL.len() + 1;

/// Draws every item starting at `row`. Returns the next free row.
pub fn render_table_rows(canvas: &mut Canvas, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(canvas, current_row, item, theme, cols);
    }
    current_row
}

/// Draws one row.
///
/// The selected row takes the selection colors across its full width, match
/// highlights included, and shows the row controls.
fn render_table_row(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let row_style = if item.is_selected {
        format!(
            "{}{}",
            Theme::bg(&theme.colors.selection_bg),
            Theme::fg(&theme.colors.selection_fg)
        )
    } else {
        theme.base()
    };

    canvas.position_cursor(row, 1);
    canvas.put(&row_style);
    canvas.put(" ");
    helpers::render_highlighted_text(canvas, &item.name, &item.highlight_ranges, theme, &row_style);
    let phone = format!(" - {}", item.phone_number);
    canvas.put(&phone);

    let label_width = 1 + text_width(&item.name) + text_width(&phone);
    let show_controls = item.is_selected && cols > label_width + CONTROLS_WIDTH;
    if show_controls {
        canvas.pad(cols - CONTROLS_WIDTH - label_width);
        render_row_controls(canvas, theme, &row_style);
    } else {
        canvas.pad(cols.saturating_sub(label_width));
    }

    canvas.put(&theme.restore());
    row + 1
}

/// Delete in the danger color, Edit in the control color, both on the
/// selection background.
fn render_row_controls(canvas: &mut Canvas, theme: &Theme, row_style: &str) {
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.danger_fg));
    canvas.put(DELETE_LABEL);
    canvas.put(row_style);
    canvas.pad(2);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.control_fg));
    canvas.put(EDIT_LABEL);
    canvas.put(row_style);
    canvas.pad(1);
}
