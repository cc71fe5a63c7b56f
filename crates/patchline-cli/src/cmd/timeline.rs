//! `pl timeline` — the scrubber strip: every patch with its date, focus
//! question, and confidence banding.

use crate::output::{pretty_rule, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use patchline_core::time;
use patchline_view::delta::{confidence_percent, describe_confidence};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct TimelineArgs {}

#[derive(Debug, Serialize)]
pub struct TimelineEntry {
    pub id: String,
    pub date: String,
    pub focus_question: String,
    pub confidence_pct: i64,
    pub confidence_band: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TimelineView {
    pub entries: Vec<TimelineEntry>,
}

/// Execute `pl timeline`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_timeline(
    _args: &TimelineArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    if store.is_empty() {
        return Ok(());
    }

    let entries = store
        .patches()
        .iter()
        .map(|patch| TimelineEntry {
            id: patch.id.clone(),
            date: time::full_date(&patch.timestamp),
            focus_question: patch.focus_question.clone(),
            confidence_pct: confidence_percent(patch.confidence),
            confidence_band: describe_confidence(patch.confidence),
        })
        .collect();

    render_mode(
        output,
        &TimelineView { entries },
        |view, w| render_timeline_text(view, w),
        |view, w| render_timeline_pretty(view, w),
    )
}

/// Track width for the pretty confidence bar; mirrors the display floor of
/// 12% so even low-confidence patches show a visible fill.
const TRACK_WIDTH: usize = 25;

#[allow(clippy::cast_sign_loss)]
fn fill_width(confidence_pct: i64) -> usize {
    let pct = confidence_pct.clamp(12, 100) as usize;
    (pct * TRACK_WIDTH).div_ceil(100)
}

fn render_timeline_pretty(view: &TimelineView, w: &mut dyn Write) -> std::io::Result<()> {
    for (index, entry) in view.entries.iter().enumerate() {
        if index > 0 {
            writeln!(w)?;
        }
        writeln!(w, "{}  [{}]", entry.date, entry.id)?;
        writeln!(w, "{}", entry.focus_question)?;
        writeln!(
            w,
            "{} . {}%  [{:#<fill$}{:.<rest$}]",
            entry.confidence_band,
            entry.confidence_pct,
            "",
            "",
            fill = fill_width(entry.confidence_pct),
            rest = TRACK_WIDTH - fill_width(entry.confidence_pct),
        )?;
    }
    pretty_rule(w)?;
    writeln!(w, "{} patches", view.entries.len())
}

fn render_timeline_text(view: &TimelineView, w: &mut dyn Write) -> std::io::Result<()> {
    for entry in &view.entries {
        writeln!(
            w,
            "{}\t{}\t{}%\t{}\t{}",
            entry.id, entry.date, entry.confidence_pct, entry.confidence_band, entry.focus_question
        )?;
    }
    Ok(())
}
