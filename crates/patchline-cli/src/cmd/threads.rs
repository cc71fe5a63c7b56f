//! `pl threads` — the narrative arcs traced across patches, with the stage
//! pinned to the selected patch marked as active.

use crate::cmd::active_patch;
use crate::output::{pretty_rule, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ThreadsArgs {
    /// Patch id used to mark active stages; defaults to the first patch.
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StageRow {
    pub patch_id: String,
    pub statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflection: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub arc: String,
    pub stages: Vec<StageRow>,
}

#[derive(Debug, Serialize)]
pub struct ThreadsView {
    pub selected_patch: String,
    pub threads: Vec<ThreadRow>,
}

/// Execute `pl threads [id]`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_threads(
    args: &ThreadsArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    let Some(patch) = active_patch(store, args.id.as_deref()) else {
        return Ok(());
    };

    let threads = store
        .threads()
        .iter()
        .map(|thread| {
            let active = thread.active_stage(&patch.id);
            ThreadRow {
                id: thread.id.clone(),
                title: thread.title.clone(),
                arc: thread.arc.clone(),
                stages: thread
                    .stages
                    .iter()
                    .enumerate()
                    .map(|(index, stage)| StageRow {
                        patch_id: stage.patch_id.clone(),
                        statement: stage.statement.clone(),
                        inflection: stage.inflection.clone(),
                        active: active == Some(index),
                    })
                    .collect(),
            }
        })
        .collect();

    render_mode(
        output,
        &ThreadsView {
            selected_patch: patch.id.clone(),
            threads,
        },
        |view, w| render_threads_text(view, w),
        |view, w| render_threads_pretty(view, w),
    )
}

fn render_threads_pretty(view: &ThreadsView, w: &mut dyn Write) -> std::io::Result<()> {
    for (index, thread) in view.threads.iter().enumerate() {
        if index > 0 {
            writeln!(w)?;
        }
        writeln!(w, "{}", thread.title)?;
        writeln!(w, "{}", thread.arc)?;
        pretty_rule(w)?;
        for stage in &thread.stages {
            let marker = if stage.active { '>' } else { ' ' };
            writeln!(w, "{marker} [{}] {}", stage.patch_id, stage.statement)?;
            if let Some(ref inflection) = stage.inflection {
                writeln!(w, "      {inflection}")?;
            }
        }
    }
    Ok(())
}

fn render_threads_text(view: &ThreadsView, w: &mut dyn Write) -> std::io::Result<()> {
    for thread in &view.threads {
        for stage in &thread.stages {
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                thread.id,
                stage.patch_id,
                if stage.active { "active" } else { "-" },
                stage.statement
            )?;
        }
    }
    Ok(())
}
