//! `pl show` — the detail reader for one patch: narrative, confidence,
//! breakthrough, and evidence artifacts.

use crate::cmd::active_patch;
use crate::output::{pretty_kv, pretty_rule, pretty_section, render_mode, OutputMode};
use clap::Args;
use patchline_core::model::Patch;
use patchline_core::store::TimelineStore;
use patchline_core::time;
use patchline_view::delta::{confidence_percent, describe_confidence};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Patch id to show; defaults to the first patch.
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArtifactView {
    pub label: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreakthroughView {
    pub headline: String,
    pub description: String,
    pub signal: &'static str,
    pub artifacts: Vec<ArtifactView>,
    pub open_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct ShowView {
    pub id: String,
    pub date: String,
    pub focus_question: String,
    pub narrative: String,
    pub confidence_pct: i64,
    pub confidence_band: &'static str,
    pub claims: usize,
    pub clusters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakthrough: Option<BreakthroughView>,
}

fn view_for(patch: &Patch) -> ShowView {
    ShowView {
        id: patch.id.clone(),
        date: time::full_date(&patch.timestamp),
        focus_question: patch.focus_question.clone(),
        narrative: patch.narrative.clone(),
        confidence_pct: confidence_percent(patch.confidence),
        confidence_band: describe_confidence(patch.confidence),
        claims: patch.claims.len(),
        clusters: patch.clusters.len(),
        breakthrough: patch.breakthrough.as_ref().map(|b| BreakthroughView {
            headline: b.headline.clone(),
            description: b.description.clone(),
            signal: b.signal_strength.display_label(),
            artifacts: b
                .supporting_artifacts
                .iter()
                .map(|a| ArtifactView {
                    label: a.label.clone(),
                    kind: a.kind.clone(),
                    description: a.description.clone(),
                    url: a.url.clone(),
                })
                .collect(),
            open_questions: b.follow_up_questions.len(),
        }),
    }
}

/// Execute `pl show [id]`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_show(args: &ShowArgs, output: OutputMode, store: &TimelineStore) -> anyhow::Result<()> {
    let Some(patch) = active_patch(store, args.id.as_deref()) else {
        return Ok(());
    };

    render_mode(
        output,
        &view_for(patch),
        |view, w| render_show_text(view, w),
        |view, w| render_show_pretty(view, w),
    )
}

fn render_show_pretty(view: &ShowView, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &view.focus_question)?;
    pretty_kv(w, "patch", &view.id)?;
    pretty_kv(w, "date", &view.date)?;
    pretty_kv(
        w,
        "confidence",
        format!("{}% ({})", view.confidence_pct, view.confidence_band),
    )?;
    pretty_kv(w, "claims", view.claims.to_string())?;
    pretty_kv(w, "clusters", view.clusters.to_string())?;
    writeln!(w)?;
    writeln!(w, "{}", view.narrative)?;

    if let Some(ref breakthrough) = view.breakthrough {
        writeln!(w)?;
        pretty_rule(w)?;
        writeln!(w, "{}  [{}]", breakthrough.headline, breakthrough.signal)?;
        writeln!(w, "{}", breakthrough.description)?;
        for artifact in &breakthrough.artifacts {
            writeln!(w, "  - {} ({})", artifact.label, artifact.kind)?;
        }
        if breakthrough.open_questions > 0 {
            writeln!(
                w,
                "  {} open question(s) spawned, see `pl backlog`",
                breakthrough.open_questions
            )?;
        }
    }
    Ok(())
}

fn render_show_text(view: &ShowView, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "id: {}", view.id)?;
    writeln!(w, "date: {}", view.date)?;
    writeln!(w, "focus: {}", view.focus_question)?;
    writeln!(
        w,
        "confidence: {}% ({})",
        view.confidence_pct, view.confidence_band
    )?;
    writeln!(w, "claims: {}", view.claims)?;
    writeln!(w, "clusters: {}", view.clusters)?;
    writeln!(w, "narrative: {}", view.narrative)?;
    if let Some(ref breakthrough) = view.breakthrough {
        writeln!(
            w,
            "breakthrough: {} [{}]",
            breakthrough.headline, breakthrough.signal
        )?;
    }
    Ok(())
}
