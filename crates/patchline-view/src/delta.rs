//! Confidence delta and momentum labels between adjacent patches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw change above this is "accelerating"; below the negation, a "drop".
const SURGE_THRESHOLD: f64 = 0.05;
/// The dead zone: |change| at or below this holds steady. The bound is
/// exclusive on both sides, so exactly +/-0.01 reads as holding.
const DRIFT_THRESHOLD: f64 = 0.01;

/// Direction of a step-to-step confidence change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered confidence step: "+21 pts" / "-4 pts" / "Baseline".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceDelta {
    pub label: String,
    pub tone: Tone,
}

/// Confidence as a whole percentage, the display form used everywhere.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

/// Describe the step from `previous` to `current` in whole percentage
/// points. The first patch in a sequence has no previous and reads as the
/// baseline.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn describe_delta(current: f64, previous: Option<f64>) -> ConfidenceDelta {
    let Some(previous) = previous else {
        return ConfidenceDelta {
            label: "Baseline".to_string(),
            tone: Tone::Neutral,
        };
    };

    let delta = ((current - previous) * 100.0).round() as i64;
    if delta > 0 {
        ConfidenceDelta {
            label: format!("+{delta} pts"),
            tone: Tone::Positive,
        }
    } else if delta < 0 {
        ConfidenceDelta {
            label: format!("{delta} pts"),
            tone: Tone::Negative,
        }
    } else {
        ConfidenceDelta {
            label: "Holding steady".to_string(),
            tone: Tone::Neutral,
        }
    }
}

/// Bucket the raw (unrounded) confidence change into a momentum phrase.
///
/// The positive and negative branches are deliberately asymmetric in their
/// comparisons; exactly +/-0.01 lands in "Signal holding" on both sides.
#[must_use]
pub fn momentum_label(current: f64, previous: Option<f64>) -> &'static str {
    let Some(previous) = previous else {
        return "First conviction snapshot";
    };

    let change = current - previous;
    if change > SURGE_THRESHOLD {
        "Conviction accelerating"
    } else if change > DRIFT_THRESHOLD {
        "Confidence building"
    } else if change < -SURGE_THRESHOLD {
        "Confidence drop"
    } else if change < -DRIFT_THRESHOLD {
        "Moment of doubt"
    } else {
        "Signal holding"
    }
}

/// Band an absolute confidence value into a narrative phrase.
#[must_use]
pub fn describe_confidence(confidence: f64) -> &'static str {
    if confidence >= 0.75 {
        "Conviction reached"
    } else if confidence >= 0.55 {
        "Emerging confidence"
    } else {
        "Sensing the shift"
    }
}
