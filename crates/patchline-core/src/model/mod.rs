//! The consolidated timeline schema.
//!
//! One tagged shape with optional fields: earlier demo iterations of the
//! same data (with and without breakthroughs, authored cluster positions,
//! plain-string follow-ups) all load into this single representation.

pub mod patch;
pub mod thread;

pub use patch::{
    Artifact, Breakthrough, Claim, ConceptCluster, FollowUpQuestion, Horizon, Patch,
    QuestionStatus, SignalStrength,
};
pub use thread::{JourneyThread, ThreadStage};

use serde::{Deserialize, Serialize};

/// The deserialization envelope for a complete timeline data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineData {
    pub subject: String,
    pub mission: String,
    pub owner: String,
    pub patches: Vec<Patch>,
    #[serde(default)]
    pub threads: Vec<JourneyThread>,
}
