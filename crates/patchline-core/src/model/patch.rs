use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How loudly a breakthrough announced itself when it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStrength {
    Weak,
    Emerging,
    Strong,
}

impl SignalStrength {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Emerging => "emerging",
            Self::Strong => "strong",
        }
    }

    /// Narrative label shown next to a breakthrough headline.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Weak => "Signal forming",
            Self::Emerging => "Signal strengthening",
            Self::Strong => "Signal locked in",
        }
    }
}

/// Lifecycle of a follow-up question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStatus {
    Open,
    InProgress,
    Resolved,
}

impl QuestionStatus {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Human label used on backlog cards.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
        }
    }
}

/// Coarse time bucket for a follow-up question.
///
/// The variant order is the fixed display order of the backlog board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Horizon {
    Immediate,
    NearTerm,
    LongTerm,
}

impl Horizon {
    /// All horizons in backlog display order.
    pub const ORDER: [Self; 3] = [Self::Immediate, Self::NearTerm, Self::LongTerm];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::NearTerm => "near-term",
            Self::LongTerm => "long-term",
        }
    }

    /// Column heading used on the backlog board.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Immediate => "Right now",
            Self::NearTerm => "Next quarter",
            Self::LongTerm => "Future horizon",
        }
    }
}

/// A single textual assertion with an associated confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub text: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A labeled, pre-authored grouping of related concepts within a patch.
///
/// `support` counts backing claims; `position` and `confidence` are only
/// present when the cluster was authored for the point-cloud scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptCluster {
    pub id: String,
    pub label: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub top_terms: Vec<String>,
}

/// Evidence attached to a breakthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A structured open question spawned by a breakthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpQuestion {
    pub id: String,
    pub prompt: String,
    pub status: QuestionStatus,
    pub horizon: Horizon,
    pub owner: String,
}

/// A highlighted narrative turning point attached to a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakthrough {
    pub headline: String,
    pub description: String,
    pub signal_strength: SignalStrength,
    #[serde(default)]
    pub supporting_artifacts: Vec<Artifact>,
    #[serde(default)]
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

/// One narrative snapshot in the timeline.
///
/// Patches are stored in ascending `timestamp` order with unique ids and
/// `confidence` in `[0, 1]`; [`crate::store::TimelineStore`] enforces this
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub id: String,
    /// RFC 3339 timestamp. Kept as a string so lexicographic comparison is
    /// chronological; display formatting parses lazily with a raw fallback.
    pub timestamp: String,
    pub focus_question: String,
    pub narrative: String,
    pub confidence: f64,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub clusters: Vec<ConceptCluster>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakthrough: Option<Breakthrough>,
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for SignalStrength {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "weak" => Ok(Self::Weak),
            "emerging" => Ok(Self::Emerging),
            "strong" => Ok(Self::Strong),
            _ => Err(ParseEnumError {
                expected: "signal strength",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for QuestionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "open" => Ok(Self::Open),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseEnumError {
                expected: "question status",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Horizon {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "immediate" => Ok(Self::Immediate),
            "near-term" => Ok(Self::NearTerm),
            "long-term" => Ok(Self::LongTerm),
            _ => Err(ParseEnumError {
                expected: "horizon",
                got: s.to_string(),
            }),
        }
    }
}
