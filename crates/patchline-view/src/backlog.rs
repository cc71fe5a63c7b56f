//! The follow-up backlog: every question across every breakthrough,
//! flattened and widened with its originating patch.
//!
//! This is a derived view. It is recomputed on demand from the store and
//! never mutates source patches.

use patchline_core::model::{FollowUpQuestion, Horizon};
use patchline_core::store::TimelineStore;
use serde::Serialize;
use tracing::debug;

/// A follow-up question widened with the patch and breakthrough it came
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogEntry {
    #[serde(flatten)]
    pub question: FollowUpQuestion,
    pub patch_id: String,
    pub patch_timestamp: String,
    pub patch_focus_question: String,
    pub breakthrough_headline: String,
}

/// The backlog partitioned into the three horizon columns, in fixed display
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizonBoard {
    pub columns: Vec<HorizonColumn>,
}

/// One horizon column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizonColumn {
    pub horizon: Horizon,
    pub entries: Vec<BacklogEntry>,
}

/// Flatten every breakthrough follow-up question in store order, preserving
/// within-patch question order.
#[must_use]
pub fn backlog(store: &TimelineStore) -> Vec<BacklogEntry> {
    let entries: Vec<BacklogEntry> = store
        .patches()
        .iter()
        .filter_map(|patch| patch.breakthrough.as_ref().map(|b| (patch, b)))
        .flat_map(|(patch, breakthrough)| {
            breakthrough
                .follow_up_questions
                .iter()
                .map(|question| BacklogEntry {
                    question: question.clone(),
                    patch_id: patch.id.clone(),
                    patch_timestamp: patch.timestamp.clone(),
                    patch_focus_question: patch.focus_question.clone(),
                    breakthrough_headline: breakthrough.headline.clone(),
                })
        })
        .collect();

    debug!(entries = entries.len(), "backlog flattened");
    entries
}

/// Partition backlog entries into horizon columns.
///
/// Columns appear in [`Horizon::ORDER`]; within each column entries sort
/// ascending by patch timestamp (lexicographic, which is chronological for
/// RFC 3339 strings). Every input entry lands in exactly one column.
#[must_use]
pub fn group_by_horizon(entries: &[BacklogEntry]) -> HorizonBoard {
    let columns = Horizon::ORDER
        .into_iter()
        .map(|horizon| {
            let mut bucket: Vec<BacklogEntry> = entries
                .iter()
                .filter(|entry| entry.question.horizon == horizon)
                .cloned()
                .collect();
            bucket.sort_by(|a, b| a.patch_timestamp.cmp(&b.patch_timestamp));
            HorizonColumn {
                horizon,
                entries: bucket,
            }
        })
        .collect();

    HorizonBoard { columns }
}
