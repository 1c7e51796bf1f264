//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`] instead of writing to stdout directly, so
//! a frame is emitted in one `print!` and can be inspected in tests.
//!
//! All widths are measured in characters, not bytes.

use crate::ui::theme::Theme;

/// Output buffer for one frame of ANSI-styled text.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col` (both 1-indexed).
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or escape sequences.
    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `n` spaces.
    pub fn pad(&mut self, n: usize) {
        self.buf.push_str(&" ".repeat(n));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Keeps at most `width` characters of `text`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Keeps the last `width` characters of `text`, so the end of a long input
/// stays visible.
#[must_use]
pub fn tail(text: &str, width: usize) -> String {
    let skip = text_width(text).saturating_sub(width);
    text.chars().skip(skip).collect()
}

/// Draws `text` with the character `ranges` in match highlight colors.
///
/// `resume` is the style sequence re-applied after each highlighted run, so
/// the row keeps its own colors (selection or base) around the matches.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    resume: &str,
) {
    if ranges.is_empty() {
        canvas.put(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        let normal_section: String = chars[current_pos..start].iter().collect();
        canvas.put(&normal_section);

        canvas.put(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.put(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        canvas.put(&highlighted_section);
        canvas.put(Theme::reset());
        canvas.put(resume);

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    canvas.put(&remaining);
}

/// Draws `text` centered on `row`, filling the rest of the line with spaces.
pub fn render_centered(canvas: &mut Canvas, row: usize, text: &str, style: &str, theme: &Theme, cols: usize) {
    let text = truncate(text, cols);
    let text_len = text_width(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    canvas.position_cursor(row, 1);
    canvas.put(style);
    canvas.pad(padding);
    canvas.put(&text);
    canvas.pad(cols.saturating_sub(padding + text_len));
    canvas.put(&theme.restore());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_collects_cursor_moves_and_text() {
        let mut canvas = Canvas::new();
        canvas.position_cursor(3, 1);
        canvas.put("hi");
        canvas.pad(2);
        assert_eq!(canvas.into_string(), "\u{1b}[3;1Hhi  ");
    }

    #[test]
    fn width_helpers_count_characters() {
        assert_eq!(text_width("Zoë"), 3);
        assert_eq!(truncate("Zoë Ray", 3), "Zoë");
        assert_eq!(tail("Zoë Ray", 3), "Ray");
        assert_eq!(tail("ab", 5), "ab");
    }

    #[test]
    fn highlighted_text_wraps_each_range() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Anna Annex", &[(0, 2), (5, 7)], &theme, "<r>");

        let out = canvas.into_string();
        let hl = Theme::bg(&theme.colors.match_highlight_bg);
        assert_eq!(out.matches(&hl).count(), 2);
        assert_eq!(out.matches("<r>").count(), 2);
        assert!(out.ends_with("nex"));
    }

    #[test]
    fn out_of_range_highlights_are_clamped() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Jo", &[(1, 9)], &theme, "");
        assert!(canvas.as_str().starts_with('J'));
        assert!(canvas.as_str().contains('o'));
    }
}
