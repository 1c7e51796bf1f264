//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] snapshots the state
//! for the pane size, then the components draw that snapshot into a
//! [`Canvas`]. The whole pane is painted with the palette background first,
//! so light and dark mode differ even where nothing is drawn.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    print!("{}", render_frame(state, rows, cols));
}

/// Renders one frame to a string.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, state.theme(), rows, cols)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();

    paint_background(&mut canvas, theme, rows, cols);
    components::render_layout(&mut canvas, vm, theme, cols, rows);
    canvas.put(Theme::reset());

    canvas.into_string()
}

fn paint_background(canvas: &mut Canvas, theme: &Theme, rows: usize, cols: usize) {
    canvas.put(&theme.base());
    for row in 1..=rows {
        canvas.position_cursor(row, 1);
        canvas.pad(cols);
    }
}
