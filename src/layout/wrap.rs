/// Text width measurement seam.
///
/// The crate never rasterizes text; the external rasterizer implements this
/// trait with its real font metrics and passes it wherever wrapping happens.
pub trait TextMeasure {
    /// Width in pixels of `text` rendered on a single line.
    fn text_width(&self, text: &str) -> f64;
}

/// Fixed-advance measurer (every character is `advance_px` wide).
///
/// Deterministic stand-in for tests and headless callers.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    /// Width of one character in pixels.
    pub advance_px: f64,
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance_px
    }
}

/// Greedy word wrap against `max_width_px`.
///
/// Words are appended to the current line while the measured candidate fits;
/// otherwise a new line starts. A single word wider than the limit still
/// occupies its own line. Whitespace runs collapse to single spaces.
pub fn wrap_text(text: &str, max_width_px: f64, measure: &dyn TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure.text_width(&candidate) <= max_width_px {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
