//! Proptest generators for timeline values.

use patchline_core::model::{
    Breakthrough, FollowUpQuestion, Horizon, Patch, QuestionStatus, SignalStrength, TimelineData,
};
use patchline_core::store::TimelineStore;
use proptest::prelude::*;

pub fn arb_confidence() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

pub fn arb_horizon() -> impl Strategy<Value = Horizon> {
    prop_oneof![
        Just(Horizon::Immediate),
        Just(Horizon::NearTerm),
        Just(Horizon::LongTerm),
    ]
}

pub fn arb_status() -> impl Strategy<Value = QuestionStatus> {
    prop_oneof![
        Just(QuestionStatus::Open),
        Just(QuestionStatus::InProgress),
        Just(QuestionStatus::Resolved),
    ]
}

pub fn arb_question(patch_index: usize) -> impl Strategy<Value = FollowUpQuestion> {
    (0usize..100, arb_status(), arb_horizon()).prop_map(move |(n, status, horizon)| {
        FollowUpQuestion {
            id: format!("fu-{patch_index}-{n}"),
            prompt: format!("Question {n} from patch {patch_index}?"),
            status,
            horizon,
            owner: format!("owner-{n}"),
        }
    })
}

fn arb_patch(index: usize) -> impl Strategy<Value = Patch> {
    let questions = prop::collection::vec(arb_question(index), 0..4);
    (arb_confidence(), questions).prop_map(move |(confidence, questions)| Patch {
        id: format!("patch-{index}"),
        // Zero-padded day keeps lexicographic order chronological.
        timestamp: format!("2024-01-{:02}T00:00:00Z", index + 1),
        focus_question: format!("Focus {index}?"),
        narrative: format!("Narrative {index}."),
        confidence,
        claims: Vec::new(),
        clusters: Vec::new(),
        breakthrough: Some(Breakthrough {
            headline: format!("Breakthrough {index}"),
            description: String::new(),
            signal_strength: SignalStrength::Emerging,
            supporting_artifacts: Vec::new(),
            follow_up_questions: questions,
        }),
    })
}

/// A valid store of 0 to 8 patches with ascending timestamps and unique ids.
pub fn arb_store() -> impl Strategy<Value = TimelineStore> {
    (0usize..=8)
        .prop_flat_map(|len| {
            let patches: Vec<_> = (0..len).map(arb_patch).collect();
            patches
        })
        .prop_map(|patches| {
            TimelineStore::new(TimelineData {
                subject: "generated".into(),
                mission: "generated".into(),
                owner: "generated".into(),
                patches,
                threads: Vec::new(),
            })
            .expect("generated timelines satisfy the store invariants")
        })
}
