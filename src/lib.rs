//! Newsreel resolves a declarative video timeline into per-frame draw
//! commands and a declarative audio mix graph.
//!
//! The crate is the deterministic core of a news-style video generator: given
//! a project document (scenes with positioned, animated objects; overlays
//! including an animated news banner; subtitles; audio tracks) it computes,
//! for any timestamp, exactly what an external rasterizer must draw, and it
//! plans, once per render, how an external encoder must mix the audio.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `JSON -> Project` ([`Project::from_json_str`]), resolving
//!    legacy document forms and validating time windows up front
//! 2. **Resolve**: `Project + ms -> ResolvedFrame` ([`resolve_frame`]), an
//!    ordered draw-command list for one timestamp
//! 3. **Mix**: `Project audio -> MixGraph` ([`build_mix_graph`]), realizable
//!    as an ffmpeg `filter_complex` string
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: resolution is pure and bit-reproducible
//!   for a given input; distinct timestamps may be resolved concurrently.
//! - **No IO**: rasterization, decoding, and encoding are external
//!   collaborators; the crate only computes geometry, timing, and plans.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod eval;
mod foundation;
mod layout;
mod project;

pub use animation::ease::Ease;
pub use animation::interp::{fade_alpha, lerp};
pub use audio::mix::{CombineRule, MIX_SAMPLE_RATE, MixGraph, MixTrack, build_mix_graph};
pub use eval::banner::{
    BannerFrame, BannerPhases, BannerStyle, layout_title_lines, sample as sample_banner,
};
pub use eval::resolver::{DrawCommand, DrawKind, RenderState, ResolvedFrame, resolve_frame};
pub use eval::subtitle::select as select_subtitle;
pub use foundation::core::{Canvas, Fps, Point, Rect, TimeWindow, Vec2};
pub use foundation::error::{NewsreelError, NewsreelResult};
pub use layout::wrap::{FixedAdvance, TextMeasure, wrap_text};
pub use project::doc::{
    AnimationDoc, AudioTrackDoc, MovePointDoc, MusicDoc, ObjectDoc, OverlayDoc, ProjectDoc,
    SceneDoc, SubtitleDoc, TextStyleDoc,
};
pub use project::model::{
    Animation, AudioTrack, BannerOverlay, ImageOverlay, ObjectKind, Overlay, Project, Scene,
    SceneObject, Subtitle, TextStyle, TrackVolume,
};
