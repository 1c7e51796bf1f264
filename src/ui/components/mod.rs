//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with the contact count
//! - [`search`]: Search input box
//! - [`controls`]: "Add Contact" and theme toggle
//! - [`table`]: Contact rows with their Delete/Edit controls
//! - [`empty`]: Message for an empty list
//! - [`prompt`]: Add/edit dialog
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Controls]
//! [Border]
//! [Contact rows, or empty state]   ← dialog overlays this area
//! [Border]
//! [Footer]
//! [blank line]
//! ```

mod controls;
mod empty;
mod footer;
mod header;
mod prompt;
mod search;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use controls::render_controls;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use prompt::render_prompt;
use search::render_search_bar;
use table::render_table_rows;

/// Draws a horizontal rule across the pane. Returns the next free row.
fn render_border(canvas: &mut Canvas, row: usize, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.put(&Theme::fg(&theme.colors.border));
    canvas.put(&"─".repeat(cols));
    canvas.put(&theme.restore());
    row + 1
}

/// Draws every section of the view model.
///
/// Assumes the background has already been painted.
pub fn render_layout(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, theme, cols);
    current_row = render_search_bar(canvas, current_row, &vm.search_bar, theme, cols);
    current_row = render_controls(canvas, current_row, &vm.controls, theme, cols);
    let list_top = render_border(canvas, current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(canvas, list_top + 1, empty, theme, cols);
    } else {
        render_table_rows(canvas, list_top, &vm.display_items, theme, cols);
    }

    if let Some(prompt) = &vm.prompt {
        render_prompt(canvas, list_top + 1, prompt, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    render_border(canvas, footer_row.saturating_sub(1), theme, cols);
    render_footer(canvas, footer_row, &vm.footer, theme, cols);
}
