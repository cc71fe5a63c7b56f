//! `pl summary` — the timeline's hero header: subject, mission, steward,
//! patch count, and latest confidence.

use crate::output::{pretty_kv, pretty_section, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use patchline_view::delta::confidence_percent;
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct SummaryArgs {}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub subject: String,
    pub mission: String,
    pub owner: String,
    pub patches: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_confidence_pct: Option<i64>,
}

/// Execute `pl summary`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_summary(
    _args: &SummaryArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    let view = SummaryView {
        subject: store.subject().to_string(),
        mission: store.mission().to_string(),
        owner: store.owner().to_string(),
        patches: store.len(),
        latest_confidence_pct: store.last().map(|p| confidence_percent(p.confidence)),
    };

    render_mode(
        output,
        &view,
        |view, w| render_summary_text(view, w),
        |view, w| render_summary_pretty(view, w),
    )
}

fn render_summary_pretty(view: &SummaryView, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Knowledge Graph Evolution")?;
    writeln!(w, "{}", view.subject)?;
    writeln!(w, "{}", view.mission)?;
    writeln!(w)?;
    pretty_kv(w, "steward", &view.owner)?;
    pretty_kv(w, "patches", view.patches.to_string())?;
    if let Some(pct) = view.latest_confidence_pct {
        pretty_kv(w, "confidence", format!("{pct}%"))?;
    }
    Ok(())
}

fn render_summary_text(view: &SummaryView, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "subject: {}", view.subject)?;
    writeln!(w, "mission: {}", view.mission)?;
    writeln!(w, "owner: {}", view.owner)?;
    writeln!(w, "patches: {}", view.patches)?;
    if let Some(pct) = view.latest_confidence_pct {
        writeln!(w, "latest_confidence: {pct}%")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run_summary, SummaryArgs, SummaryView};
    use crate::output::OutputMode;
    use patchline_core::store::TimelineStore;

    fn view() -> SummaryView {
        SummaryView {
            subject: "Sarah Chen's path".into(),
            mission: "Tracing the moments.".into(),
            owner: "Stewarding team".into(),
            patches: 3,
            latest_confidence_pct: Some(78),
        }
    }

    #[test]
    fn pretty_output_names_every_field() {
        let mut buf = Vec::new();
        super::render_summary_pretty(&view(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Sarah Chen's path"));
        assert!(out.contains("steward:"));
        assert!(out.contains("78%"));
    }

    #[test]
    fn text_output_is_line_per_field() {
        let mut buf = Vec::new();
        super::render_summary_text(&view(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("latest_confidence: 78%"));
    }

    #[test]
    fn empty_store_omits_confidence() {
        let store = TimelineStore::from_json_str(
            r#"{"subject":"s","mission":"m","owner":"o","patches":[]}"#,
        )
        .expect("valid");
        run_summary(&SummaryArgs {}, OutputMode::Text, &store).unwrap();
    }

    #[test]
    fn json_serializes_cleanly() {
        let json = serde_json::to_value(view()).unwrap();
        assert_eq!(json["patches"], 3);
        assert_eq!(json["latest_confidence_pct"], 78);
    }
}
