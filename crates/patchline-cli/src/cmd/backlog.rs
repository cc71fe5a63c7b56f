//! `pl backlog` — every follow-up question across the timeline, grouped
//! into the three horizon columns.

use crate::output::{pretty_rule, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use patchline_core::time;
use patchline_view::{backlog, group_by_horizon, HorizonBoard};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct BacklogArgs {}

#[derive(Debug, Serialize)]
pub struct BacklogView {
    pub board: HorizonBoard,
}

/// Execute `pl backlog`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_backlog(
    _args: &BacklogArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    let entries = backlog(store);
    if entries.is_empty() {
        return Ok(());
    }

    render_mode(
        output,
        &BacklogView {
            board: group_by_horizon(&entries),
        },
        |view, w| render_backlog_text(view, w),
        |view, w| render_backlog_pretty(view, w),
    )
}

fn render_backlog_pretty(view: &BacklogView, w: &mut dyn Write) -> std::io::Result<()> {
    for (index, column) in view.board.columns.iter().enumerate() {
        if index > 0 {
            writeln!(w)?;
        }
        writeln!(
            w,
            "{} ({})",
            column.horizon.display_label(),
            column.entries.len()
        )?;
        pretty_rule(w)?;
        for entry in &column.entries {
            writeln!(
                w,
                "[{}] {}",
                entry.question.status.display_label(),
                entry.question.prompt
            )?;
            writeln!(
                w,
                "      {} . {} . {}",
                entry.question.owner,
                time::month_day(&entry.patch_timestamp),
                entry.breakthrough_headline
            )?;
        }
    }
    Ok(())
}

fn render_backlog_text(view: &BacklogView, w: &mut dyn Write) -> std::io::Result<()> {
    for column in &view.board.columns {
        for entry in &column.entries {
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}",
                column.horizon,
                entry.question.id,
                entry.question.status,
                entry.patch_id,
                entry.question.prompt
            )?;
        }
    }
    Ok(())
}
