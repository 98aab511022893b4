use crate::{
    foundation::error::{NewsreelError, NewsreelResult},
    project::model::AudioTrack,
};

/// Sample rate the mix graph is realized at.
pub const MIX_SAMPLE_RATE: u32 = 44_100;

/// One planned track contribution: delayed, scaled, then padded for summing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MixTrack {
    /// Source path or URL.
    pub src: String,
    /// Delay applied equally to all channels, in milliseconds.
    pub delay_ms: u64,
    /// Linear amplitude gain (>= 0; no upper clamp).
    pub gain: f64,
}

/// Summation policy for the mix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum CombineRule {
    /// Arithmetic sum of inputs with no implicit normalization; combined
    /// length equals the longest contributing track.
    #[default]
    #[serde(rename = "sum,no-normalize,duration=longest")]
    SumNoNormalizeLongest,
}

impl std::fmt::Display for CombineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SumNoNormalizeLongest => f.write_str("sum,no-normalize,duration=longest"),
        }
    }
}

/// Declarative audio mix description handed to an external encoder.
///
/// Source-agnostic: the reference realization is an ffmpeg `filter_complex`
/// string ([`MixGraph::to_filter_complex`]), but any engine with delay, gain,
/// pad, sum, and trim primitives satisfies the contract.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum MixGraph {
    /// No tracks: the encoder must be fed an explicit silent stream of this
    /// length.
    Silence {
        /// Silence duration in seconds.
        duration_sec: f64,
    },
    /// One or more contributing tracks.
    Tracks {
        /// Planned per-track delay/gain, in document order.
        tracks: Vec<MixTrack>,
        /// Summation policy.
        combine: CombineRule,
        /// Final trim bound in seconds.
        trim_to_sec: f64,
    },
}

/// Build the mix graph for `tracks`, trimmed to `target_duration_sec`.
///
/// Deterministic and pure: gains come straight from each track's declared
/// volume form, delays are `round(offset * 1000)` ms.
#[tracing::instrument(skip(tracks))]
pub fn build_mix_graph(
    tracks: &[AudioTrack],
    target_duration_sec: f64,
) -> NewsreelResult<MixGraph> {
    if !target_duration_sec.is_finite() || target_duration_sec <= 0.0 {
        return Err(NewsreelError::audio(
            "mix target duration must be finite and > 0",
        ));
    }

    if tracks.is_empty() {
        return Ok(MixGraph::Silence {
            duration_sec: target_duration_sec,
        });
    }

    let mut planned = Vec::with_capacity(tracks.len());
    for (i, track) in tracks.iter().enumerate() {
        if !track.offset_sec.is_finite() || track.offset_sec < 0.0 {
            return Err(NewsreelError::audio(format!(
                "track {i} offset must be finite and >= 0"
            )));
        }
        planned.push(MixTrack {
            src: track.src.clone(),
            delay_ms: (track.offset_sec * 1000.0).round() as u64,
            gain: track.volume.fraction(),
        });
    }

    Ok(MixGraph::Tracks {
        tracks: planned,
        combine: CombineRule::SumNoNormalizeLongest,
        trim_to_sec: target_duration_sec,
    })
}

impl MixGraph {
    /// Whether the muxing step must pass `-shortest` (stop at the shorter of
    /// video and mixed audio). True whenever real tracks contribute.
    pub fn requires_shortest_mux(&self) -> bool {
        matches!(self, Self::Tracks { .. })
    }

    /// Render the reference ffmpeg `filter_complex` realization.
    ///
    /// Track `i` maps to ffmpeg input `i`; the mixed result is labeled
    /// `[aout]`.
    pub fn to_filter_complex(&self) -> String {
        match self {
            Self::Silence { duration_sec } => format!(
                "anullsrc=channel_layout=stereo:sample_rate={MIX_SAMPLE_RATE},atrim=0:{}[aout]",
                fmt_f64(*duration_sec)
            ),
            Self::Tracks {
                tracks,
                combine: CombineRule::SumNoNormalizeLongest,
                trim_to_sec,
            } => {
                let trim = fmt_f64(*trim_to_sec);
                if let [only] = tracks.as_slice() {
                    return format!(
                        "[0:a]adelay={d}|{d},volume={g},apad,atrim=0:{trim}[aout]",
                        d = only.delay_ms,
                        g = fmt_f64(only.gain),
                    );
                }

                let mut filters = Vec::with_capacity(tracks.len() + 1);
                let mut mix_inputs = String::new();
                for (i, track) in tracks.iter().enumerate() {
                    filters.push(format!(
                        "[{i}:a]adelay={d}|{d},volume={g},apad[a{i}]",
                        d = track.delay_ms,
                        g = fmt_f64(track.gain),
                    ));
                    mix_inputs.push_str(&format!("[a{i}]"));
                }
                filters.push(format!(
                    "{mix_inputs}amix=inputs={n}:normalize=0:duration=longest,atrim=0:{trim}[aout]",
                    n = tracks.len(),
                ));
                filters.join(";")
            }
        }
    }
}

fn fmt_f64(v: f64) -> String {
    let s = format!("{v:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mix.rs"]
mod tests;
