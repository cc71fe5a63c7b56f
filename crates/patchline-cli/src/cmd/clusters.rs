//! `pl clusters` — concept clusters for the selected patch, with an
//! optional point-cloud scene dump for rendering backends.

use crate::cmd::active_patch;
use crate::output::{pretty_rule, pretty_section, render_mode, OutputMode};
use clap::Args;
use patchline_core::store::TimelineStore;
use patchline_view::delta::confidence_percent;
use patchline_view::{cluster_scene, confidence_color, ClusterScene};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ClustersArgs {
    /// Patch id to read clusters from; defaults to the first patch.
    pub id: Option<String>,

    /// Include the flat vertex arrays consumed by the scene backend.
    #[arg(long)]
    pub scene: bool,
}

#[derive(Debug, Serialize)]
pub struct ClusterRow {
    pub id: String,
    pub label: String,
    pub summary: String,
    pub confidence_pct: i64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_terms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClustersView {
    pub patch_id: String,
    pub clusters: Vec<ClusterRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<ClusterScene>,
}

/// Execute `pl clusters [id] [--scene]`.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_clusters(
    args: &ClustersArgs,
    output: OutputMode,
    store: &TimelineStore,
) -> anyhow::Result<()> {
    let Some(patch) = active_patch(store, args.id.as_deref()) else {
        return Ok(());
    };

    let clusters = patch
        .clusters
        .iter()
        .map(|cluster| {
            let confidence = cluster.confidence.unwrap_or(patch.confidence);
            ClusterRow {
                id: cluster.id.clone(),
                label: cluster.label.clone(),
                summary: cluster.summary.clone(),
                confidence_pct: confidence_percent(confidence),
                color: confidence_color(confidence).css(),
                support: cluster.support,
                top_terms: cluster.top_terms.clone(),
            }
        })
        .collect();

    let view = ClustersView {
        patch_id: patch.id.clone(),
        clusters,
        scene: args.scene.then(|| cluster_scene(patch)),
    };

    render_mode(
        output,
        &view,
        |view, w| render_clusters_text(view, w),
        |view, w| render_clusters_pretty(view, w),
    )
}

fn render_clusters_pretty(view: &ClustersView, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Concept clusters in {}", view.patch_id))?;
    for cluster in &view.clusters {
        let support = cluster
            .support
            .map_or_else(String::new, |s| format!("  support {s}"));
        writeln!(
            w,
            "{}  {}%{}  {}",
            cluster.label, cluster.confidence_pct, support, cluster.color
        )?;
        writeln!(w, "  {}", cluster.summary)?;
        if !cluster.top_terms.is_empty() {
            writeln!(w, "  terms: {}", cluster.top_terms.join(", "))?;
        }
    }
    if let Some(ref scene) = view.scene {
        pretty_rule(w)?;
        writeln!(
            w,
            "scene: {} points ({} position, {} color, {} size components)",
            scene.point_count(),
            scene.positions.len(),
            scene.colors.len(),
            scene.sizes.len()
        )?;
    }
    Ok(())
}

fn render_clusters_text(view: &ClustersView, w: &mut dyn Write) -> std::io::Result<()> {
    for cluster in &view.clusters {
        writeln!(
            w,
            "{}\t{}\t{}%\t{}",
            cluster.id, cluster.label, cluster.confidence_pct, cluster.color
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run_clusters, ClusterRow, ClustersArgs, ClustersView};
    use crate::output::OutputMode;
    use patchline_core::store::TimelineStore;
    use patchline_view::cluster_scene;

    fn view(with_scene: bool) -> ClustersView {
        let store = TimelineStore::bundled().expect("bundled");
        let patch = store.first().expect("non-empty");
        ClustersView {
            patch_id: patch.id.clone(),
            clusters: vec![ClusterRow {
                id: "cluster-bottlenecks".into(),
                label: "Decision bottlenecks".into(),
                summary: "Ambiguity routes upward.".into(),
                confidence_pct: 42,
                color: "rgba(160, 155, 158, 0.92)".into(),
                support: Some(5),
                top_terms: vec!["escalation".into()],
            }],
            scene: with_scene.then(|| cluster_scene(patch)),
        }
    }

    #[test]
    fn pretty_lists_label_support_and_color() {
        let mut buf = Vec::new();
        super::render_clusters_pretty(&view(false), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Concept clusters in patch-2024-q1"));
        assert!(out.contains("Decision bottlenecks  42%  support 5"));
        assert!(out.contains("terms: escalation"));
        assert!(!out.contains("scene:"));
    }

    #[test]
    fn scene_flag_appends_array_summary() {
        let mut buf = Vec::new();
        super::render_clusters_pretty(&view(true), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("scene: 2 points (6 position, 8 color, 2 size components)"));
    }

    #[test]
    fn json_includes_scene_arrays_only_when_asked() {
        let without = serde_json::to_value(view(false)).unwrap();
        assert!(without.get("scene").is_none());

        let with = serde_json::to_value(view(true)).unwrap();
        assert_eq!(with["scene"]["sizes"].as_array().map(Vec::len), Some(2));
        assert_eq!(with["scene"]["positions"].as_array().map(Vec::len), Some(6));
        assert_eq!(with["scene"]["colors"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn bundled_patch_renders_in_every_mode() {
        let store = TimelineStore::bundled().expect("bundled");
        let args = ClustersArgs {
            id: Some("patch-2024-q3".into()),
            scene: true,
        };
        run_clusters(&args, OutputMode::Text, &store).unwrap();
        run_clusters(&args, OutputMode::Json, &store).unwrap();
    }

    #[test]
    fn empty_store_renders_nothing() {
        let store = TimelineStore::from_json_str(
            r#"{"subject":"s","mission":"m","owner":"o","patches":[]}"#,
        )
        .expect("valid");
        let args = ClustersArgs {
            id: None,
            scene: true,
        };
        run_clusters(&args, OutputMode::Pretty, &store).unwrap();
    }
}
