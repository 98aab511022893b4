/// Linear interpolation from `a` to `b`. `t` is intentionally unclamped;
/// callers clamp before easing.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fade envelope for one animation window.
///
/// Returns the alpha multiplier at `local_ms` into a window of `dur_ms`:
/// - `local / fade_in_ms` inside the fade-in window `[0, fade_in_ms)`
/// - `(dur - local) / fade_out_ms`, clamped to `>= 0`, inside the fade-out
///   window `(dur - fade_out_ms, dur]`
/// - `1.0` everywhere else.
///
/// Multiple fades on one object compose multiplicatively at the call site.
pub fn fade_alpha(local_ms: f64, dur_ms: f64, fade_in_sec: f64, fade_out_sec: f64) -> f64 {
    let fade_in_ms = fade_in_sec * 1000.0;
    if fade_in_ms > 0.0 && local_ms < fade_in_ms {
        return (local_ms / fade_in_ms).max(0.0);
    }

    let fade_out_ms = fade_out_sec * 1000.0;
    if fade_out_ms > 0.0 && local_ms > dur_ms - fade_out_ms {
        return ((dur_ms - local_ms) / fade_out_ms).max(0.0);
    }

    1.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
