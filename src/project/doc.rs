use serde::Deserialize;

/// Raw serde view of a project document.
///
/// This layer accepts both the current and legacy document shapes (list of
/// audio tracks vs. a single `music` entry, `volumePercent` vs. `gain`) and
/// tolerates unknown fields. It is resolved once into the canonical
/// [`crate::Project`] model; nothing downstream branches on field presence.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDoc {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color (CSS-style string).
    #[serde(default = "default_background")]
    pub background: String,
    /// Frame rate in frames per second.
    pub fps: f64,
    /// Explicit total duration in seconds; derived from scenes when absent.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Timeline scenes.
    #[serde(default)]
    pub scenes: Vec<SceneDoc>,
    /// Time-windowed overlays independent of scenes.
    #[serde(default)]
    pub overlays: Vec<OverlayDoc>,
    /// Subtitle entries.
    #[serde(default)]
    pub subtitles: Vec<SubtitleDoc>,
    /// Audio tracks (current form).
    #[serde(default)]
    pub audio: Vec<AudioTrackDoc>,
    /// Single background music entry (legacy form).
    #[serde(default)]
    pub music: Option<MusicDoc>,
}

fn default_background() -> String {
    "#000000".to_string()
}

/// Raw scene entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDoc {
    /// Scene start in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    /// Scene end in seconds.
    #[serde(default)]
    pub end: Option<f64>,
    /// Positioned objects in draw order.
    #[serde(default)]
    pub objects: Vec<ObjectDoc>,
}

/// Raw positioned object.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDoc {
    /// Object type: `image`, `video`, or `text`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Object identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// X position in pixels.
    #[serde(default)]
    pub x: f64,
    /// Y position in pixels.
    #[serde(default)]
    pub y: f64,
    /// Width in pixels.
    #[serde(default)]
    pub w: f64,
    /// Height in pixels.
    #[serde(default)]
    pub h: f64,
    /// Z-order within the frame.
    #[serde(default)]
    pub z: i32,
    /// Source path or URL (image/video).
    #[serde(default)]
    pub src: Option<String>,
    /// Text content (text objects).
    #[serde(default)]
    pub text: Option<String>,
    /// Text style (text objects).
    #[serde(default)]
    pub style: Option<TextStyleDoc>,
    /// Animations applied to the object.
    #[serde(default)]
    pub animations: Vec<AnimationDoc>,
}

/// Raw text style payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleDoc {
    /// Font family name.
    #[serde(default)]
    pub font: Option<String>,
    /// Font size in pixels.
    #[serde(default)]
    pub size: Option<f64>,
    /// Text color (CSS-style string).
    #[serde(default)]
    pub color: Option<String>,
    /// Rounded-rectangle background color, when requested.
    #[serde(default)]
    pub background: Option<String>,
    /// Whether to draw a drop shadow.
    #[serde(default)]
    pub shadow: Option<bool>,
}

/// Raw animation entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDoc {
    /// Animation type: `zoom`, `move`, or `fade`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Easing name; unknown names resolve to linear.
    #[serde(default)]
    pub easing: Option<String>,
    /// Start value (scalar for zoom, `{x, y}` for move).
    #[serde(default)]
    pub from: Option<serde_json::Value>,
    /// End value (scalar for zoom, `{x, y}` for move).
    #[serde(default)]
    pub to: Option<serde_json::Value>,
    /// Fade-in duration in seconds (fade only).
    #[serde(rename = "in", default)]
    pub fade_in: Option<f64>,
    /// Fade-out duration in seconds (fade only).
    #[serde(default)]
    pub out: Option<f64>,
}

/// `{x, y}` offset payload used by move animations.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct MovePointDoc {
    /// Horizontal offset in pixels.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset in pixels.
    #[serde(default)]
    pub y: f64,
}

/// Raw overlay entry. The news-banner kind is distinguished by the presence
/// of `newsTitle`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDoc {
    /// Overlay start in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    /// Overlay end in seconds.
    #[serde(default)]
    pub end: Option<f64>,
    /// Source path or URL (image overlays).
    #[serde(default)]
    pub src: Option<String>,
    /// X position in pixels.
    #[serde(default)]
    pub x: f64,
    /// Y position in pixels.
    #[serde(default)]
    pub y: f64,
    /// Width in pixels.
    #[serde(default)]
    pub w: f64,
    /// Height in pixels.
    #[serde(default)]
    pub h: f64,
    /// Z-order; overlays default to 100.
    #[serde(default)]
    pub z: Option<i32>,
    /// Opacity in `[0, 1]`.
    #[serde(default)]
    pub opacity: Option<f64>,
    /// News banner title; presence selects the banner overlay kind.
    #[serde(default)]
    pub news_title: Option<String>,
}

/// Raw subtitle entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleDoc {
    /// Subtitle start in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    /// Subtitle end in seconds.
    #[serde(default)]
    pub end: Option<f64>,
    /// Subtitle text.
    #[serde(default)]
    pub text: String,
}

/// Raw audio track (current form).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrackDoc {
    /// Source path or URL.
    pub src: String,
    /// Timeline offset in seconds.
    #[serde(default)]
    pub offset: f64,
    /// Amplitude-linear volume in percent (0-100).
    #[serde(default)]
    pub volume_percent: Option<f64>,
    /// Legacy volume in decibels.
    #[serde(default)]
    pub gain: Option<f64>,
}

/// Raw legacy background music entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDoc {
    /// Source path or URL.
    pub src: String,
    /// Volume in decibels.
    #[serde(default)]
    pub gain: Option<f64>,
    /// Timeline offset in seconds.
    #[serde(default)]
    pub offset: Option<f64>,
}
