use crate::{
    animation::ease::Ease,
    foundation::core::{Canvas, Fps, TimeWindow, Vec2},
    foundation::error::{NewsreelError, NewsreelResult},
    project::doc::{
        AnimationDoc, MovePointDoc, ObjectDoc, OverlayDoc, ProjectDoc, SceneDoc, SubtitleDoc,
    },
};

/// A complete timeline project.
///
/// The project is a pure data model resolved once from a JSON document
/// ([`Project::from_json_str`]) and never mutated by the core. Rendering is
/// driven by [`crate::resolve_frame`] per timestamp, and audio by
/// [`crate::build_mix_graph`] once before encoding.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Background color (CSS-style string).
    pub background: String,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Total duration in seconds (explicit or derived from the last scene).
    pub duration_sec: f64,
    /// Timeline scenes in document order. Scenes may overlap in time.
    pub scenes: Vec<Scene>,
    /// Time-windowed overlays independent of scene structure.
    pub overlays: Vec<Overlay>,
    /// Subtitle entries (assumed non-overlapping).
    pub subtitles: Vec<Subtitle>,
    /// Normalized audio track list (legacy `music` entries land here too).
    pub audio: Vec<AudioTrack>,
}

/// A time-windowed container of positioned, animated objects.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Active window; `None` means the scene never activates (malformed or
    /// missing bounds in the document).
    pub window: Option<TimeWindow>,
    /// Objects in draw order.
    pub objects: Vec<SceneObject>,
}

/// One positioned object inside a scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneObject {
    /// Object identifier (synthesized when the document omits one).
    pub id: String,
    /// X position in pixels.
    pub x: f64,
    /// Y position in pixels.
    pub y: f64,
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
    /// Z-order within the frame.
    pub z: i32,
    /// Type-specific payload.
    pub kind: ObjectKind,
    /// Animations applied in document order.
    pub animations: Vec<Animation>,
}

/// Type-specific payload of a scene object.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ObjectKind {
    /// Raster image drawn from `src`.
    Image {
        /// Source path or URL.
        src: String,
    },
    /// Video frame drawn from `src` at a scene-local source time.
    Video {
        /// Source path or URL.
        src: String,
    },
    /// Styled text block.
    Text {
        /// Text content.
        text: String,
        /// Render style.
        style: TextStyle,
    },
}

/// Render style for text objects.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font family name, when specified.
    pub font: Option<String>,
    /// Font size in pixels.
    pub size_px: f64,
    /// Text color (CSS-style string).
    pub color: String,
    /// Rounded-rectangle background color, when requested.
    pub background: Option<String>,
    /// Whether the rasterizer should draw a drop shadow.
    pub shadow: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: None,
            size_px: 32.0,
            color: "#ffffff".to_string(),
            background: None,
            shadow: false,
        }
    }
}

/// One animation entry on a scene object.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Animation {
    /// Uniform scale from `from` to `to` over the scene window. Later zoom
    /// entries overwrite earlier ones.
    Zoom {
        /// Start scale.
        from: f64,
        /// End scale.
        to: f64,
        /// Easing applied to normalized scene time.
        ease: Ease,
    },
    /// Translation offset from `from` to `to` over the scene window.
    Move {
        /// Start offset in pixels.
        from: Vec2,
        /// End offset in pixels.
        to: Vec2,
        /// Easing applied to normalized scene time.
        ease: Ease,
    },
    /// Alpha envelope with fade-in/out windows at the scene edges. Multiple
    /// fades compose multiplicatively.
    Fade {
        /// Fade-in duration in seconds.
        fade_in_sec: f64,
        /// Fade-out duration in seconds.
        fade_out_sec: f64,
    },
}

/// A time-windowed drawable independent of scene structure.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Overlay {
    /// Generic image/logo overlay.
    Image(ImageOverlay),
    /// News-banner overlay, animated by the banner state machine.
    Banner(BannerOverlay),
}

impl Overlay {
    /// Active window of either overlay kind.
    pub fn window(&self) -> Option<TimeWindow> {
        match self {
            Self::Image(o) => o.window,
            Self::Banner(o) => o.window,
        }
    }
}

/// Image/logo overlay payload.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImageOverlay {
    /// Active window; `None` never activates.
    pub window: Option<TimeWindow>,
    /// Source path or URL.
    pub src: String,
    /// X position in pixels.
    pub x: f64,
    /// Y position in pixels.
    pub y: f64,
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
    /// Z-order (document default 100).
    pub z: i32,
    /// Opacity, clamped to `>= 0` at load.
    pub opacity: f64,
}

/// News-banner overlay payload.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BannerOverlay {
    /// Active window; `None` never activates.
    pub window: Option<TimeWindow>,
    /// Z-order (document default 100).
    pub z: i32,
    /// Headline text, word-wrapped by the rasterizer.
    pub title: String,
}

/// One subtitle entry.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Subtitle {
    /// Active window; `None` never activates.
    pub window: Option<TimeWindow>,
    /// Subtitle text.
    pub text: String,
}

/// One normalized audio track.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AudioTrack {
    /// Source path or URL.
    pub src: String,
    /// Timeline offset in seconds (>= 0).
    pub offset_sec: f64,
    /// Volume, in whichever form the document used.
    pub volume: TrackVolume,
}

/// Track volume as declared in the document.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum TrackVolume {
    /// Amplitude-linear percent (0-100; values above 100 amplify).
    Percent(f64),
    /// Legacy decibel gain.
    GainDb(f64),
    /// No volume specified.
    Default,
}

impl TrackVolume {
    /// Linear amplitude fraction: `percent / 100`, `10^(dB/20)`, or `1.0`.
    /// Negative fractions clamp to 0; there is no upper clamp since
    /// over-range values represent intentional amplification.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Percent(p) => (p / 100.0).max(0.0),
            Self::GainDb(db) => 10f64.powf(db / 20.0),
            Self::Default => 1.0,
        }
    }
}

impl Project {
    /// Parse and resolve a JSON project document.
    pub fn from_json_str(json: &str) -> NewsreelResult<Self> {
        let doc: ProjectDoc = serde_json::from_str(json)
            .map_err(|e| NewsreelError::serde(format!("invalid project document: {e}")))?;
        Self::from_doc(doc)
    }

    /// Resolve a raw document into the canonical model and validate it.
    pub fn from_doc(doc: ProjectDoc) -> NewsreelResult<Self> {
        let fps = Fps::from_f64(doc.fps)?;

        let scenes = doc
            .scenes
            .into_iter()
            .enumerate()
            .map(|(i, s)| resolve_scene(s, i))
            .collect::<NewsreelResult<Vec<_>>>()?;

        let overlays = doc
            .overlays
            .into_iter()
            .enumerate()
            .map(|(i, o)| resolve_overlay(o, i))
            .collect::<NewsreelResult<Vec<_>>>()?;

        let subtitles = doc
            .subtitles
            .into_iter()
            .enumerate()
            .map(|(i, s)| resolve_subtitle(s, i))
            .collect::<NewsreelResult<Vec<_>>>()?;

        let audio = resolve_audio(doc.audio, doc.music);

        let duration_sec = match doc.duration {
            Some(d) => d,
            None => scenes
                .iter()
                .filter_map(|s| s.window.map(|w| w.end_sec))
                .fold(f64::NEG_INFINITY, f64::max),
        };

        let project = Self {
            canvas: Canvas {
                width: doc.width,
                height: doc.height,
            },
            background: doc.background,
            fps,
            duration_sec,
            scenes,
            overlays,
            subtitles,
            audio,
        };
        project.validate()?;
        Ok(project)
    }

    /// Validate project invariants. Called by [`Project::from_doc`]; exposed
    /// for programmatically built projects.
    pub fn validate(&self) -> NewsreelResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(NewsreelError::validation("canvas width/height must be > 0"));
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(NewsreelError::validation(
                "project duration must be explicit or derivable from scenes, and > 0",
            ));
        }
        for (i, track) in self.audio.iter().enumerate() {
            if track.src.trim().is_empty() {
                return Err(NewsreelError::validation(format!(
                    "audio track {i} src must be non-empty"
                )));
            }
            if !track.offset_sec.is_finite() || track.offset_sec < 0.0 {
                return Err(NewsreelError::validation(format!(
                    "audio track {i} offset must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Resolve optional document bounds into a window.
///
/// Missing or malformed bounds yield `None` (never active); present bounds
/// with `end <= start` are a configuration error surfaced at load time.
fn window_from_bounds(
    start: Option<f64>,
    end: Option<f64>,
    what: &str,
) -> NewsreelResult<Option<TimeWindow>> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };
    if !start.is_finite() || !end.is_finite() || start < 0.0 {
        return Ok(None);
    }
    if end <= start {
        return Err(NewsreelError::validation(format!(
            "{what} end must be > start"
        )));
    }
    Ok(Some(TimeWindow::new(start, end)?))
}

fn resolve_scene(doc: SceneDoc, index: usize) -> NewsreelResult<Scene> {
    let window = window_from_bounds(doc.start, doc.end, &format!("scene {index}"))?;
    let mut objects = Vec::with_capacity(doc.objects.len());
    for (obj_index, obj) in doc.objects.into_iter().enumerate() {
        if let Some(resolved) = resolve_object(obj, index, obj_index)? {
            objects.push(resolved);
        }
    }
    Ok(Scene { window, objects })
}

fn resolve_object(
    doc: ObjectDoc,
    scene_index: usize,
    obj_index: usize,
) -> NewsreelResult<Option<SceneObject>> {
    let kind = match doc.kind.as_str() {
        "image" => ObjectKind::Image {
            src: doc.src.ok_or_else(|| {
                NewsreelError::validation(format!(
                    "image object {obj_index} in scene {scene_index} requires src"
                ))
            })?,
        },
        "video" => ObjectKind::Video {
            src: doc.src.ok_or_else(|| {
                NewsreelError::validation(format!(
                    "video object {obj_index} in scene {scene_index} requires src"
                ))
            })?,
        },
        "text" => {
            let style = doc.style.unwrap_or_default();
            let defaults = TextStyle::default();
            ObjectKind::Text {
                text: doc.text.ok_or_else(|| {
                    NewsreelError::validation(format!(
                        "text object {obj_index} in scene {scene_index} requires text"
                    ))
                })?,
                style: TextStyle {
                    font: style.font,
                    size_px: style.size.unwrap_or(defaults.size_px),
                    color: style.color.unwrap_or(defaults.color),
                    background: style.background,
                    shadow: style.shadow.unwrap_or(false),
                },
            }
        }
        other => {
            tracing::debug!(kind = other, scene_index, obj_index, "skipping unknown object type");
            return Ok(None);
        }
    };

    let mut animations = Vec::with_capacity(doc.animations.len());
    for anim in doc.animations {
        if let Some(resolved) = resolve_animation(anim, scene_index, obj_index)? {
            animations.push(resolved);
        }
    }

    Ok(Some(SceneObject {
        id: doc
            .id
            .unwrap_or_else(|| format!("obj-{scene_index}-{obj_index}")),
        x: doc.x,
        y: doc.y,
        w: doc.w,
        h: doc.h,
        z: doc.z,
        kind,
        animations,
    }))
}

fn resolve_animation(
    doc: AnimationDoc,
    scene_index: usize,
    obj_index: usize,
) -> NewsreelResult<Option<Animation>> {
    let ease = doc
        .easing
        .as_deref()
        .map(Ease::from_name)
        .unwrap_or_default();

    let anim = match doc.kind.as_str() {
        "zoom" => Animation::Zoom {
            from: scalar_endpoint(doc.from.as_ref(), "zoom from")?,
            to: scalar_endpoint(doc.to.as_ref(), "zoom to")?,
            ease,
        },
        "move" => Animation::Move {
            from: point_endpoint(doc.from, "move from")?,
            to: point_endpoint(doc.to, "move to")?,
            ease,
        },
        "fade" => {
            let fade_in_sec = doc.fade_in.unwrap_or(0.0);
            let fade_out_sec = doc.out.unwrap_or(0.0);
            if !fade_in_sec.is_finite()
                || fade_in_sec < 0.0
                || !fade_out_sec.is_finite()
                || fade_out_sec < 0.0
            {
                return Err(NewsreelError::validation(
                    "fade durations must be finite and >= 0",
                ));
            }
            Animation::Fade {
                fade_in_sec,
                fade_out_sec,
            }
        }
        other => {
            tracing::debug!(
                kind = other,
                scene_index,
                obj_index,
                "skipping unknown animation type"
            );
            return Ok(None);
        }
    };
    Ok(Some(anim))
}

fn scalar_endpoint(value: Option<&serde_json::Value>, what: &str) -> NewsreelResult<f64> {
    value
        .and_then(serde_json::Value::as_f64)
        .filter(|v| v.is_finite())
        .ok_or_else(|| NewsreelError::validation(format!("{what} must be a finite number")))
}

fn point_endpoint(value: Option<serde_json::Value>, what: &str) -> NewsreelResult<Vec2> {
    let value =
        value.ok_or_else(|| NewsreelError::validation(format!("{what} must be an {{x, y}} object")))?;
    let point: MovePointDoc = serde_json::from_value(value)
        .map_err(|e| NewsreelError::validation(format!("{what} must be an {{x, y}} object: {e}")))?;
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(NewsreelError::validation(format!(
            "{what} components must be finite"
        )));
    }
    Ok(Vec2::new(point.x, point.y))
}

fn resolve_overlay(doc: OverlayDoc, index: usize) -> NewsreelResult<Overlay> {
    let window = window_from_bounds(doc.start, doc.end, &format!("overlay {index}"))?;
    let z = doc.z.unwrap_or(100);

    if let Some(title) = doc.news_title {
        return Ok(Overlay::Banner(BannerOverlay { window, z, title }));
    }

    let src = doc.src.ok_or_else(|| {
        NewsreelError::validation(format!("overlay {index} requires src or newsTitle"))
    })?;
    Ok(Overlay::Image(ImageOverlay {
        window,
        src,
        x: doc.x,
        y: doc.y,
        w: doc.w,
        h: doc.h,
        z,
        opacity: doc.opacity.unwrap_or(1.0).max(0.0),
    }))
}

fn resolve_subtitle(doc: SubtitleDoc, index: usize) -> NewsreelResult<Subtitle> {
    Ok(Subtitle {
        window: window_from_bounds(doc.start, doc.end, &format!("subtitle {index}"))?,
        text: doc.text,
    })
}

fn resolve_audio(
    tracks: Vec<crate::project::doc::AudioTrackDoc>,
    music: Option<crate::project::doc::MusicDoc>,
) -> Vec<AudioTrack> {
    if !tracks.is_empty() {
        return tracks
            .into_iter()
            .map(|t| AudioTrack {
                src: t.src,
                offset_sec: t.offset,
                volume: match (t.volume_percent, t.gain) {
                    (Some(p), _) => TrackVolume::Percent(p),
                    (None, Some(db)) => TrackVolume::GainDb(db),
                    (None, None) => TrackVolume::Default,
                },
            })
            .collect();
    }

    match music {
        Some(m) => vec![AudioTrack {
            src: m.src,
            offset_sec: m.offset.unwrap_or(0.0),
            volume: match m.gain {
                Some(db) => TrackVolume::GainDb(db),
                None => TrackVolume::Default,
            },
        }],
        None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/model.rs"]
mod tests;
