//! `pl trajectory` — the confidence arc: each patch as a step with its
//! delta from the previous patch and a momentum read on the raw change.

use crate::output::{pretty_rule, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use patchline_core::time;
use patchline_view::delta::{confidence_percent, describe_delta, momentum_label, Tone};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct TrajectoryArgs {}

#[derive(Debug, Serialize)]
pub struct TrajectoryStep {
    pub id: String,
    pub date: String,
    pub confidence_pct: i64,
    pub delta: String,
    pub tone: Tone,
    pub momentum: &'static str,
    pub narrative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakthrough: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrajectoryView {
    pub steps: Vec<TrajectoryStep>,
}

/// Execute `pl trajectory`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_trajectory(
    _args: &TrajectoryArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    if store.is_empty() {
        return Ok(());
    }

    let steps = store
        .adjacent_pairs()
        .map(|(previous, patch)| {
            let previous = previous.map(|p| p.confidence);
            let delta = describe_delta(patch.confidence, previous);
            TrajectoryStep {
                id: patch.id.clone(),
                date: time::month_year(&patch.timestamp),
                confidence_pct: confidence_percent(patch.confidence),
                delta: delta.label,
                tone: delta.tone,
                momentum: momentum_label(patch.confidence, previous),
                narrative: patch.narrative.clone(),
                breakthrough: patch.breakthrough.as_ref().map(|b| b.headline.clone()),
            }
        })
        .collect();

    render_mode(
        output,
        &TrajectoryView { steps },
        |view, w| render_trajectory_text(view, w),
        |view, w| render_trajectory_pretty(view, w),
    )
}

const fn tone_marker(tone: Tone) -> char {
    match tone {
        Tone::Positive => '+',
        Tone::Negative => '-',
        Tone::Neutral => '=',
    }
}

fn render_trajectory_pretty(view: &TrajectoryView, w: &mut dyn Write) -> std::io::Result<()> {
    for (index, step) in view.steps.iter().enumerate() {
        if index > 0 {
            writeln!(w, "   |")?;
        }
        writeln!(
            w,
            "({}) {}  {}%  {}",
            tone_marker(step.tone),
            step.date,
            step.confidence_pct,
            step.delta
        )?;
        writeln!(w, "    {}", step.momentum)?;
        writeln!(w, "    {}", step.narrative)?;
        if let Some(ref headline) = step.breakthrough {
            writeln!(w, "    breakthrough: {headline}")?;
        }
    }
    pretty_rule(w)
}

fn render_trajectory_text(view: &TrajectoryView, w: &mut dyn Write) -> std::io::Result<()> {
    for step in &view.steps {
        writeln!(
            w,
            "{}\t{}\t{}%\t{}\t{}",
            step.id, step.date, step.confidence_pct, step.delta, step.momentum
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run_trajectory, TrajectoryArgs, TrajectoryStep, TrajectoryView};
    use crate::output::OutputMode;
    use patchline_core::store::TimelineStore;
    use patchline_view::delta::Tone;

    fn view() -> TrajectoryView {
        TrajectoryView {
            steps: vec![
                TrajectoryStep {
                    id: "patch-2024-q1".into(),
                    date: "Mar 2024".into(),
                    confidence_pct: 42,
                    delta: "Baseline".into(),
                    tone: Tone::Neutral,
                    momentum: "First conviction snapshot",
                    narrative: "The first reading of the stall pattern.".into(),
                    breakthrough: None,
                },
                TrajectoryStep {
                    id: "patch-2024-q3".into(),
                    date: "Sep 2024".into(),
                    confidence_pct: 63,
                    delta: "+21 pts".into(),
                    tone: Tone::Positive,
                    momentum: "Conviction accelerating",
                    narrative: "Rotation spreads the decision load.".into(),
                    breakthrough: Some("Stewardship rotation unlocks parallel discovery".into()),
                },
            ],
        }
    }

    #[test]
    fn pretty_marks_tone_and_momentum() {
        let mut buf = Vec::new();
        super::render_trajectory_pretty(&view(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("(=) Mar 2024  42%  Baseline"));
        assert!(out.contains("(+) Sep 2024  63%  +21 pts"));
        assert!(out.contains("Conviction accelerating"));
        assert!(out.contains("breakthrough: Stewardship rotation"));
    }

    #[test]
    fn text_is_one_row_per_step() {
        let mut buf = Vec::new();
        super::render_trajectory_text(&view(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("patch-2024-q3\tSep 2024\t63%\t+21 pts"));
    }

    #[test]
    fn empty_store_renders_nothing() {
        let store = TimelineStore::from_json_str(
            r#"{"subject":"s","mission":"m","owner":"o","patches":[]}"#,
        )
        .expect("valid");
        run_trajectory(&TrajectoryArgs {}, OutputMode::Json, &store).unwrap();
    }

    #[test]
    fn bundled_store_renders_all_steps() {
        let store = TimelineStore::bundled().expect("bundled");
        run_trajectory(&TrajectoryArgs {}, OutputMode::Text, &store).unwrap();
    }

    #[test]
    fn json_omits_missing_breakthrough() {
        let json = serde_json::to_value(view()).unwrap();
        assert!(json["steps"][0].get("breakthrough").is_none());
        assert_eq!(json["steps"][1]["tone"], "positive");
    }
}
