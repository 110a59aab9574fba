use crate::domain::comparison::{TiltInfo, TiltLevel};

/// Below this many percentage points a deviation is neutral.
pub const NEUTRAL_BAND_PP: f64 = 0.2;
/// At or above this many percentage points a deviation is strong.
pub const STRONG_TILT_PP: f64 = 3.0;

/// Classifies `model - neutral` (percentage points). Total over finite inputs.
pub fn classify_tilt(neutral_weight: f64, model_weight: f64) -> TiltInfo {
    let diff = model_weight - neutral_weight;
    let abs = diff.abs();

    let level = if abs < NEUTRAL_BAND_PP {
        TiltLevel::Neutral
    } else if abs < STRONG_TILT_PP {
        if diff > 0.0 {
            TiltLevel::Overweight
        } else {
            TiltLevel::Underweight
        }
    } else if diff > 0.0 {
        TiltLevel::OverweightStrong
    } else {
        TiltLevel::UnderweightStrong
    };

    TiltInfo { level, diff }
}

/// Missing weights count as 0.
pub fn classify_tilt_opt(neutral_weight: Option<f64>, model_weight: Option<f64>) -> TiltInfo {
    classify_tilt(neutral_weight.unwrap_or(0.0), model_weight.unwrap_or(0.0))
}
