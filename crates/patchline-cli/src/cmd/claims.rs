//! `pl claims` — the claims ledger for the selected patch.

use crate::cmd::active_patch;
use crate::output::{pretty_rule, pretty_section, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use patchline_view::delta::confidence_percent;
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ClaimsArgs {
    /// Patch id to read claims from; defaults to the first patch.
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimRow {
    pub id: String,
    pub text: String,
    pub confidence_pct: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimsView {
    pub patch_id: String,
    pub claims: Vec<ClaimRow>,
}

/// Execute `pl claims [id]`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_claims(
    args: &ClaimsArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    let Some(patch) = active_patch(store, args.id.as_deref()) else {
        return Ok(());
    };

    let claims = patch
        .claims
        .iter()
        .map(|claim| ClaimRow {
            id: claim.id.clone(),
            text: claim.text.clone(),
            confidence_pct: confidence_percent(claim.confidence),
            source: claim.source.clone(),
            tags: claim.tags.clone(),
        })
        .collect();

    render_mode(
        output,
        &ClaimsView {
            patch_id: patch.id.clone(),
            claims,
        },
        |view, w| render_claims_text(view, w),
        |view, w| render_claims_pretty(view, w),
    )
}

fn render_claims_pretty(view: &ClaimsView, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Claims in {}", view.patch_id))?;
    for claim in &view.claims {
        writeln!(w, "[{:>3}%] {}", claim.confidence_pct, claim.text)?;
        if let Some(ref source) = claim.source {
            writeln!(w, "       source: {source}")?;
        }
        if !claim.tags.is_empty() {
            writeln!(w, "       tags: {}", claim.tags.join(", "))?;
        }
    }
    pretty_rule(w)?;
    writeln!(w, "{} claims", view.claims.len())
}

fn render_claims_text(view: &ClaimsView, w: &mut dyn Write) -> std::io::Result<()> {
    for claim in &view.claims {
        writeln!(
            w,
            "{}\t{}%\t{}",
            claim.id, claim.confidence_pct, claim.text
        )?;
    }
    Ok(())
}
