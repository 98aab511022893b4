use crate::{
    animation::ease::Ease,
    animation::interp::lerp,
    foundation::core::{Canvas, Point, Rect},
    layout::wrap::{TextMeasure, wrap_text},
};

/// Durations of the six banner phases in milliseconds.
///
/// A banner runs grow -> delay -> text fade-in -> hold -> text fade-out ->
/// collapse. [`BannerPhases::fit`] compresses the nominal envelope to a
/// caller-specified window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BannerPhases {
    /// Bar growth phase.
    pub grow_ms: u64,
    /// Pause between full bar and text fade-in.
    pub delay_ms: u64,
    /// Text fade-in phase.
    pub text_fade_ms: u64,
    /// Steady hold phase.
    pub hold_ms: u64,
    /// Text fade-out phase.
    pub text_out_ms: u64,
    /// Bar collapse phase.
    pub collapse_ms: u64,
}

impl BannerPhases {
    /// Nominal phase durations used when the window is long enough.
    pub const NOMINAL: Self = Self {
        grow_ms: 300,
        delay_ms: 100,
        text_fade_ms: 200,
        hold_ms: 4000,
        text_out_ms: 200,
        collapse_ms: 300,
    };

    /// Nominal envelope length (5300 ms), used as the compression
    /// denominator and the threshold below which phases compress.
    pub const NOMINAL_TOTAL_MS: u64 = 5300;

    /// Fit the nominal envelope into `available_ms` (clamped to >= 1).
    ///
    /// Windows at or above the nominal total keep the nominal durations; the
    /// banner simply goes inactive after [`BannerPhases::total_ms`]. Shorter
    /// windows compress in two passes: every phase scales by
    /// `available / nominal`, floored to >= 1 ms (delay and hold may reach 0),
    /// then the rounding residual lands on the collapse phase, re-floored to
    /// >= 1 ms, so the durations sum exactly to the window.
    pub fn fit(available_ms: u64) -> Self {
        let available = available_ms.max(1);
        if available >= Self::NOMINAL_TOTAL_MS {
            return Self::NOMINAL;
        }

        let factor = (available as f64) / (Self::NOMINAL_TOTAL_MS as f64);
        let scaled =
            |nominal_ms: u64, min_ms: u64| (((nominal_ms as f64) * factor) as u64).max(min_ms);

        let mut phases = Self {
            grow_ms: scaled(Self::NOMINAL.grow_ms, 1),
            delay_ms: scaled(Self::NOMINAL.delay_ms, 0),
            text_fade_ms: scaled(Self::NOMINAL.text_fade_ms, 1),
            hold_ms: scaled(Self::NOMINAL.hold_ms, 0),
            text_out_ms: scaled(Self::NOMINAL.text_out_ms, 1),
            collapse_ms: scaled(Self::NOMINAL.collapse_ms, 1),
        };

        let residual = (available as i64) - (phases.total_ms() as i64);
        phases.collapse_ms = ((phases.collapse_ms as i64) + residual).max(1) as u64;
        phases
    }

    /// Relative start of the text fade-in.
    pub fn text_start_ms(self) -> u64 {
        self.grow_ms + self.delay_ms
    }

    /// Relative time at which the text is fully visible.
    pub fn text_fully_visible_ms(self) -> u64 {
        self.text_start_ms() + self.text_fade_ms
    }

    /// Relative start of the text fade-out.
    pub fn text_out_start_ms(self) -> u64 {
        self.text_fully_visible_ms() + self.hold_ms
    }

    /// Relative start of the bar collapse.
    pub fn collapse_start_ms(self) -> u64 {
        self.text_out_start_ms() + self.text_out_ms
    }

    /// Total active duration; the banner renders nothing after this.
    pub fn total_ms(self) -> u64 {
        self.collapse_start_ms() + self.collapse_ms
    }
}

/// Static banner geometry.
///
/// The envelope is fixed by [`BannerPhases`]; this fixes the pixels. Defaults
/// derive a bottom-anchored lower third from the canvas; callers may construct
/// the struct directly to override any constant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BannerStyle {
    /// Left edge of the bar in pixels.
    pub x: f64,
    /// Fixed bar width in pixels.
    pub bar_width: f64,
    /// Fixed bottom edge of the bar; the top edge derives from current height.
    pub bottom_y: f64,
    /// Bar height before growth and after collapse.
    pub initial_height: f64,
    /// Bar height during the hold phase.
    pub final_height: f64,
    /// Horizontal text padding inside the bar.
    pub padding_x: f64,
    /// Vertical text padding inside the bar.
    pub padding_y: f64,
    /// Text line height in pixels.
    pub line_height: f64,
}

impl BannerStyle {
    /// Lower-third defaults for the given canvas.
    pub fn for_canvas(canvas: Canvas) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        Self {
            x: w * 0.05,
            bar_width: w * 0.9,
            bottom_y: h * 0.92,
            initial_height: 8.0,
            final_height: 120.0,
            padding_x: 24.0,
            padding_y: 16.0,
            line_height: 34.0,
        }
    }

    /// Usable text width inside the bar.
    pub fn content_width(&self) -> f64 {
        (self.bar_width - 2.0 * self.padding_x).max(0.0)
    }

    /// Number of text lines that fit the final bar height.
    pub fn max_lines(&self) -> usize {
        let fit = ((self.final_height - 2.0 * self.padding_y) / self.line_height).floor();
        (fit as usize).max(1)
    }
}

/// Banner render state at one instant, ready for the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BannerFrame {
    /// Bar rectangle (bottom edge fixed, top derived from current height).
    pub bar: Rect,
    /// Bar opacity; mirrors height progress.
    pub bar_alpha: f64,
    /// Text opacity.
    pub text_alpha: f64,
    /// Top-left origin of the text content at full bar height.
    pub text_origin: Point,
    /// Wrap width for the title text.
    pub content_width: f64,
    /// Text line height in pixels.
    pub line_height: f64,
    /// Cap on rendered lines; overflow lines are silently dropped.
    pub max_lines: usize,
}

/// Sample the banner at `rel_ms` milliseconds after its window start.
///
/// Returns `None` outside `[0, total]`.
pub fn sample(phases: BannerPhases, style: &BannerStyle, rel_ms: u64) -> Option<BannerFrame> {
    if rel_ms > phases.total_ms() {
        return None;
    }

    let collapse_start = phases.collapse_start_ms();
    let height_progress = if rel_ms < phases.grow_ms {
        Ease::EaseOut.apply(phase_progress(rel_ms, phases.grow_ms))
    } else if rel_ms < collapse_start {
        1.0
    } else {
        1.0 - Ease::EaseOut.apply(phase_progress(rel_ms - collapse_start, phases.collapse_ms))
    };

    let height = lerp(style.initial_height, style.final_height, height_progress);
    let bar = Rect::new(
        style.x,
        style.bottom_y - height,
        style.x + style.bar_width,
        style.bottom_y,
    );

    let text_start = phases.text_start_ms();
    let text_fully_visible = phases.text_fully_visible_ms();
    let text_out_start = phases.text_out_start_ms();
    let text_alpha = if rel_ms < text_start {
        0.0
    } else if rel_ms < text_fully_visible {
        Ease::EaseInOut.apply(phase_progress(rel_ms - text_start, phases.text_fade_ms))
    } else if rel_ms < text_out_start {
        1.0
    } else if rel_ms < collapse_start {
        1.0 - Ease::EaseInOut.apply(phase_progress(rel_ms - text_out_start, phases.text_out_ms))
    } else {
        0.0
    };

    Some(BannerFrame {
        bar,
        bar_alpha: height_progress,
        text_alpha,
        text_origin: Point::new(
            style.x + style.padding_x,
            style.bottom_y - style.final_height + style.padding_y,
        ),
        content_width: style.content_width(),
        line_height: style.line_height,
        max_lines: style.max_lines(),
    })
}

/// Normalized progress inside one phase; zero-length phases count as complete.
fn phase_progress(elapsed_ms: u64, phase_ms: u64) -> f64 {
    if phase_ms == 0 {
        return 1.0;
    }
    ((elapsed_ms as f64) / (phase_ms as f64)).clamp(0.0, 1.0)
}

/// Wrap the banner title to the bar's content width and cap it to the lines
/// that fit the final bar height.
pub fn layout_title_lines(
    title: &str,
    style: &BannerStyle,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut lines = wrap_text(title, style.content_width(), measure);
    lines.truncate(style.max_lines());
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/eval/banner.rs"]
mod tests;
