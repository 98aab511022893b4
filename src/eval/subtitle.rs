use crate::project::model::Subtitle;

/// Pick the active subtitle at `ms`, if any.
///
/// First match wins; entries are assumed non-overlapping. Linear scan, which
/// is fine at subtitle counts.
pub fn select(subtitles: &[Subtitle], ms: u64) -> Option<&Subtitle> {
    subtitles
        .iter()
        .find(|s| s.window.is_some_and(|w| w.contains_ms(ms)))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/subtitle.rs"]
mod tests;
