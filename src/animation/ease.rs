/// Named easing curves mapping normalized time `[0, 1] -> [0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    #[default]
    Linear,
    /// Quadratic ease-in-out.
    EaseInOut,
    /// Cubic ease-out.
    EaseOut,
}

impl Ease {
    /// Apply the curve; `t` is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Resolve a document easing name. Unknown names fall back to
    /// [`Ease::Linear`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "easeInOut" => Self::EaseInOut,
            "easeOut" => Self::EaseOut,
            _ => Self::Linear,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
