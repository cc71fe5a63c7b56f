//! One module per subcommand. Every handler takes its parsed args, the
//! resolved [`crate::output::OutputMode`], and a loaded store, and renders
//! to stdout.

pub mod backlog;
pub mod claims;
pub mod clusters;
pub mod completions;
pub mod show;
pub mod summary;
pub mod threads;
pub mod timeline;
pub mod trajectory;
pub mod validate;

use patchline_core::model::Patch;
use patchline_core::store::TimelineStore;
use patchline_view::Selection;

/// Resolve the optionally selected patch for a subcommand.
///
/// A missing or unknown id falls back to the first patch; `None` means the
/// store is empty and the command renders nothing.
pub fn active_patch<'a>(store: &'a TimelineStore, id: Option<&str>) -> Option<&'a Patch> {
    let mut selection = Selection::initial(store);
    if let Some(id) = id {
        selection.select(id);
    }
    selection.resolve_active(store)
}

#[cfg(test)]
mod tests {
    use super::active_patch;
    use patchline_core::store::TimelineStore;

    #[test]
    fn no_id_yields_first_patch() {
        let store = TimelineStore::bundled().expect("bundled");
        let patch = active_patch(&store, None).expect("non-empty");
        assert_eq!(patch.id, "patch-2024-q1");
    }

    #[test]
    fn unknown_id_falls_back_to_first() {
        let store = TimelineStore::bundled().expect("bundled");
        let patch = active_patch(&store, Some("nope")).expect("falls back");
        assert_eq!(patch.id, "patch-2024-q1");
    }

    #[test]
    fn known_id_resolves_exactly() {
        let store = TimelineStore::bundled().expect("bundled");
        let patch = active_patch(&store, Some("patch-2025-q1")).expect("resolves");
        assert_eq!(patch.id, "patch-2025-q1");
    }

    #[test]
    fn empty_store_yields_none() {
        let store = TimelineStore::from_json_str(
            r#"{"subject":"s","mission":"m","owner":"o","patches":[]}"#,
        )
        .expect("valid");
        assert!(active_patch(&store, Some("anything")).is_none());
    }
}
