//! The immutable timeline store.
//!
//! Constructed once at process start from a pre-authored data file, alive
//! for the process lifetime, never mutated. All invariants are checked at
//! construction so every read after that is infallible.

use crate::error::StoreError;
use crate::model::{JourneyThread, Patch, TimelineData};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// The bundled demo dataset: Sarah Chen's path to scalable leadership.
const BUNDLED_DATA: &str = include_str!("../data/sarah_chen.json");

/// An ordered, validated collection of patches and narrative threads.
#[derive(Debug, Clone)]
pub struct TimelineStore {
    data: TimelineData,
}

impl TimelineStore {
    /// Validate `data` and wrap it in a read-only store.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when patch ids collide, timestamps are not
    /// strictly ascending, any confidence leaves `[0, 1]`, or a thread stage
    /// references a patch that does not exist.
    pub fn new(data: TimelineData) -> Result<Self, StoreError> {
        validate(&data)?;
        debug!(
            patches = data.patches.len(),
            threads = data.threads.len(),
            "timeline store constructed"
        );
        Ok(Self { data })
    }

    /// Parse and validate a timeline from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on malformed JSON or any invariant failure.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let data: TimelineData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// Load, parse, and validate a timeline from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The dataset shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the embedded data fails validation; the
    /// bundled dataset is covered by tests, so this only fires on a broken
    /// build.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_json_str(BUNDLED_DATA)
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.data.subject
    }

    #[must_use]
    pub fn mission(&self) -> &str {
        &self.data.mission
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.data.owner
    }

    /// All patches in ascending timestamp order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.data.patches
    }

    #[must_use]
    pub fn threads(&self) -> &[JourneyThread] {
        &self.data.threads
    }

    /// Each patch paired with its predecessor, in store order.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (Option<&Patch>, &Patch)> {
        self.data.patches.iter().enumerate().map(|(index, patch)| {
            let previous = index.checked_sub(1).map(|i| &self.data.patches[i]);
            (previous, patch)
        })
    }

    /// Look up a patch by exact id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Patch> {
        self.data.patches.iter().find(|p| p.id == id)
    }

    /// First patch in store order, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Patch> {
        self.data.patches.first()
    }

    /// Most recent patch, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Patch> {
        self.data.patches.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.patches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.patches.is_empty()
    }
}

fn check_confidence(owner: String, value: f64) -> Result<(), StoreError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(StoreError::ConfidenceOutOfRange { owner, value })
    }
}

fn validate(data: &TimelineData) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    let mut previous: Option<&Patch> = None;

    for patch in &data.patches {
        if !seen.insert(patch.id.as_str()) {
            return Err(StoreError::DuplicatePatchId {
                id: patch.id.clone(),
            });
        }

        if let Some(prev) = previous {
            // RFC 3339 format precondition: lexicographic == chronological.
            if patch.timestamp <= prev.timestamp {
                return Err(StoreError::OutOfOrderTimestamp {
                    id: patch.id.clone(),
                    timestamp: patch.timestamp.clone(),
                    previous: prev.timestamp.clone(),
                });
            }
        }
        previous = Some(patch);

        check_confidence(format!("patch {}", patch.id), patch.confidence)?;
        for claim in &patch.claims {
            check_confidence(format!("claim {}", claim.id), claim.confidence)?;
        }
        for cluster in &patch.clusters {
            if let Some(confidence) = cluster.confidence {
                check_confidence(format!("cluster {}", cluster.id), confidence)?;
            }
        }
    }

    for thread in &data.threads {
        for stage in &thread.stages {
            if !seen.contains(stage.patch_id.as_str()) {
                return Err(StoreError::DanglingThreadStage {
                    thread_id: thread.id.clone(),
                    patch_id: stage.patch_id.clone(),
                });
            }
        }
    }

    Ok(())
}
