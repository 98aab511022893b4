use crate::{
    animation::interp::{fade_alpha, lerp},
    eval::banner::{self, BannerFrame, BannerPhases, BannerStyle},
    foundation::core::Vec2,
    project::model::{Animation, ObjectKind, Overlay, Project, SceneObject, TextStyle},
};

/// Fully resolved geometry, transform and opacity for one visual element at
/// one instant. Consumed by an external rasterizer in list order.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DrawCommand {
    /// Element identifier (object id, or synthesized for overlays).
    pub id: String,
    /// Z-order; the command list is sorted non-decreasing by this.
    pub z: i32,
    /// X position in pixels.
    pub x: f64,
    /// Y position in pixels.
    pub y: f64,
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Uniform scale about the element's center.
    pub scale: f64,
    /// Translation offset in pixels.
    pub translate: Vec2,
    /// Type-specific payload.
    pub kind: DrawKind,
}

/// Type-specific payload of a draw command.
#[derive(Clone, Debug, serde::Serialize)]
pub enum DrawKind {
    /// Draw a raster image.
    Image {
        /// Source path or URL.
        src: String,
    },
    /// Draw one video frame at a source-local time.
    Video {
        /// Source path or URL.
        src: String,
        /// Milliseconds into the source, relative to the current scene start.
        source_time_ms: u64,
    },
    /// Draw a styled text block (word-wrapped by the rasterizer).
    Text {
        /// Text content.
        text: String,
        /// Render style.
        style: TextStyle,
    },
    /// Draw the news banner at the sampled envelope state.
    Banner {
        /// Headline text.
        title: String,
        /// Sampled bar/text state.
        frame: BannerFrame,
    },
}

/// Resolver output for one timestamp.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ResolvedFrame {
    /// Queried timestamp in milliseconds.
    pub ms: u64,
    /// Draw commands sorted non-decreasing by `z`; scene objects precede
    /// overlays at equal `z`.
    pub commands: Vec<DrawCommand>,
}

impl ResolvedFrame {
    /// Whether nothing is visible at this timestamp.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Per-run value the caller threads between successive resolver calls to
/// apply its own "persist previous frame" policy. The core only reports
/// emptiness; it never decides whether to clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    last_drawn_ms: Option<u64>,
}

impl RenderState {
    /// Record a resolved frame; empty frames leave the state untouched.
    pub fn note_frame(&mut self, frame: &ResolvedFrame) {
        if !frame.is_empty() {
            self.last_drawn_ms = Some(frame.ms);
        }
    }

    /// Timestamp of the last non-empty frame observed, if any.
    pub fn last_drawn_ms(self) -> Option<u64> {
        self.last_drawn_ms
    }
}

/// Resolve the ordered draw-command list for timestamp `ms`.
///
/// Pure and stateless: identical `(project, ms)` inputs yield structurally
/// identical output, and distinct timestamps may be resolved concurrently.
#[tracing::instrument(skip(project))]
pub fn resolve_frame(project: &Project, ms: u64) -> ResolvedFrame {
    let mut commands = Vec::new();

    // The first in-window scene (document order) is current; video objects
    // resolve their source time against its start.
    let current_scene_start_ms = project
        .scenes
        .iter()
        .filter_map(|s| s.window)
        .find(|w| w.contains_ms(ms))
        .map(|w| w.start_ms());

    for scene in &project.scenes {
        let Some(window) = scene.window else { continue };
        if !window.contains_ms(ms) {
            continue;
        }
        let local_ms = (ms as f64) - window.start_ms();
        let dur_ms = window.duration_ms();
        for object in &scene.objects {
            commands.push(eval_object(object, local_ms, dur_ms, ms, current_scene_start_ms));
        }
    }

    for (index, overlay) in project.overlays.iter().enumerate() {
        let Overlay::Image(image) = overlay else {
            continue;
        };
        let Some(window) = image.window else { continue };
        if !window.contains_ms(ms) {
            continue;
        }
        commands.push(DrawCommand {
            id: format!("overlay-{index}"),
            z: image.z,
            x: image.x,
            y: image.y,
            w: image.w,
            h: image.h,
            alpha: image.opacity.clamp(0.0, 1.0),
            scale: 1.0,
            translate: Vec2::ZERO,
            kind: DrawKind::Image {
                src: image.src.clone(),
            },
        });
    }

    // Stable: scene objects keep their insertion position ahead of overlays
    // at equal z.
    commands.sort_by_key(|c| c.z);

    // Banners splice in at the index their z belongs in the sorted list.
    let style = BannerStyle::for_canvas(project.canvas);
    for (index, overlay) in project.overlays.iter().enumerate() {
        let Overlay::Banner(banner_overlay) = overlay else {
            continue;
        };
        let Some(window) = banner_overlay.window else {
            continue;
        };
        if !window.contains_ms(ms) {
            continue;
        }

        let phases = BannerPhases::fit(window.duration_ms().round() as u64);
        let rel_ms = ((ms as f64) - window.start_ms()).max(0.0).round() as u64;
        let Some(frame) = banner::sample(phases, &style, rel_ms) else {
            continue;
        };

        let command = DrawCommand {
            id: format!("overlay-{index}"),
            z: banner_overlay.z,
            x: frame.bar.x0,
            y: frame.bar.y0,
            w: frame.bar.width(),
            h: frame.bar.height(),
            alpha: frame.bar_alpha.clamp(0.0, 1.0),
            scale: 1.0,
            translate: Vec2::ZERO,
            kind: DrawKind::Banner {
                title: banner_overlay.title.clone(),
                frame,
            },
        };
        let at = commands.partition_point(|c| c.z <= command.z);
        commands.insert(at, command);
    }

    ResolvedFrame { ms, commands }
}

fn eval_object(
    object: &SceneObject,
    local_ms: f64,
    dur_ms: f64,
    ms: u64,
    current_scene_start_ms: Option<f64>,
) -> DrawCommand {
    let mut scale = 1.0;
    let mut translate = Vec2::ZERO;
    let mut alpha = 1.0;

    // Zero-length windows cannot occur for validated scenes, but animations
    // must stay total: dur <= 0 resolves as already complete.
    let t = if dur_ms <= 0.0 {
        1.0
    } else {
        (local_ms / dur_ms).clamp(0.0, 1.0)
    };

    for animation in &object.animations {
        match animation {
            Animation::Zoom { from, to, ease } => {
                scale = lerp(*from, *to, ease.apply(t));
            }
            Animation::Move { from, to, ease } => {
                let eased = ease.apply(t);
                translate = Vec2::new(lerp(from.x, to.x, eased), lerp(from.y, to.y, eased));
            }
            Animation::Fade {
                fade_in_sec,
                fade_out_sec,
            } => {
                alpha *= fade_alpha(local_ms, dur_ms, *fade_in_sec, *fade_out_sec);
            }
        }
    }

    let kind = match &object.kind {
        ObjectKind::Image { src } => DrawKind::Image { src: src.clone() },
        ObjectKind::Video { src } => DrawKind::Video {
            src: src.clone(),
            source_time_ms: current_scene_start_ms
                .map(|start| ((ms as f64) - start).max(0.0).round() as u64)
                .unwrap_or(0),
        },
        ObjectKind::Text { text, style } => DrawKind::Text {
            text: text.clone(),
            style: style.clone(),
        },
    };

    DrawCommand {
        id: object.id.clone(),
        z: object.z,
        x: object.x,
        y: object.y,
        w: object.w,
        h: object.h,
        alpha: alpha.clamp(0.0, 1.0),
        scale,
        translate,
        kind,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
