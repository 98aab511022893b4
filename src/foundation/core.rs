use crate::foundation::error::{NewsreelError, NewsreelResult};

pub use kurbo::{Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Timeline frame rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds). Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a rational frame rate, rejecting zero terms.
    pub fn new(num: u32, den: u32) -> NewsreelResult<Self> {
        if num == 0 {
            return Err(NewsreelError::validation("fps num must be > 0"));
        }
        if den == 0 {
            return Err(NewsreelError::validation("fps den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Build from a plain frames-per-second number as it appears in project
    /// documents, e.g. `30` or `29.97`.
    pub fn from_f64(fps: f64) -> NewsreelResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(NewsreelError::validation("fps must be finite and > 0"));
        }
        let num = (fps * 1000.0).round();
        if num < 1.0 || num > f64::from(u32::MAX) {
            return Err(NewsreelError::validation("fps out of representable range"));
        }
        let (num, den) = reduce(num as u32, 1000);
        Self::new(num, den)
    }

    /// Frame rate as a plain number.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Timestamp in integer milliseconds of frame `frame`, rounded half-up.
    pub fn frame_to_ms(self, frame: u64) -> u64 {
        let num = u128::from(frame) * 1000u128 * u128::from(self.den);
        let den = u128::from(self.num);
        ((num + (den / 2)) / den) as u64
    }
}

fn reduce(mut a: u32, mut b: u32) -> (u32, u32) {
    let (x, y) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    (x / a, y / a)
}

/// Half-open time window `[start, end)` in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Window start in seconds (inclusive).
    pub start_sec: f64,
    /// Window end in seconds (exclusive). Must be > `start_sec`.
    pub end_sec: f64,
}

impl TimeWindow {
    /// Build a window, rejecting non-finite bounds and `end <= start`.
    pub fn new(start_sec: f64, end_sec: f64) -> NewsreelResult<Self> {
        if !start_sec.is_finite() || !end_sec.is_finite() {
            return Err(NewsreelError::validation("time window bounds must be finite"));
        }
        if start_sec < 0.0 {
            return Err(NewsreelError::validation("time window start must be >= 0"));
        }
        if end_sec <= start_sec {
            return Err(NewsreelError::validation("time window end must be > start"));
        }
        Ok(Self { start_sec, end_sec })
    }

    /// Whether timestamp `ms` falls inside `[start, end)`.
    pub fn contains_ms(self, ms: u64) -> bool {
        let sec = (ms as f64) / 1000.0;
        self.start_sec <= sec && sec < self.end_sec
    }

    /// Window start in milliseconds.
    pub fn start_ms(self) -> f64 {
        self.start_sec * 1000.0
    }

    /// Window end in milliseconds.
    pub fn end_ms(self) -> f64 {
        self.end_sec * 1000.0
    }

    /// Window length in milliseconds.
    pub fn duration_ms(self) -> f64 {
        (self.end_sec - self.start_sec) * 1000.0
    }
}
