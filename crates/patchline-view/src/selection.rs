//! The single piece of mutable state: which patch is selected.
//!
//! Selection carries no transition rules. Any id, valid or not, may be
//! selected at any time; safety lives in [`Selection::resolve_active`],
//! which falls back to the first patch and tolerates the empty store.

use patchline_core::model::Patch;
use patchline_core::store::TimelineStore;
use tracing::trace;

/// Holds the currently selected patch id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Start with the store's first patch selected (or nothing, when the
    /// store is empty).
    #[must_use]
    pub fn initial(store: &TimelineStore) -> Self {
        Self {
            selected: store.first().map(|p| p.id.clone()),
        }
    }

    /// Set the selection unconditionally. The id is not checked against the
    /// store; resolution tolerates unknown ids.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        trace!(%id, "patch selected");
        self.selected = Some(id);
    }

    /// The raw selected id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection to a patch.
    ///
    /// An id present in the store resolves exactly; an absent or unset id
    /// falls back to the first patch; an empty store yields `None` and the
    /// caller suppresses rendering.
    #[must_use]
    pub fn resolve_active<'a>(&self, store: &'a TimelineStore) -> Option<&'a Patch> {
        self.selected
            .as_deref()
            .and_then(|id| store.find_by_id(id))
            .or_else(|| store.first())
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use patchline_core::store::TimelineStore;

    fn store() -> TimelineStore {
        TimelineStore::bundled().expect("bundled data")
    }

    #[test]
    fn initial_selection_is_the_first_patch() {
        let store = store();
        let selection = Selection::initial(&store);
        assert_eq!(selection.selected_id(), Some("patch-2024-q1"));
    }

    #[test]
    fn present_id_resolves_exactly() {
        let store = store();
        let mut selection = Selection::initial(&store);
        selection.select("patch-2025-q1");
        let active = selection.resolve_active(&store).expect("resolves");
        assert_eq!(active.id, "patch-2025-q1");
    }

    #[test]
    fn absent_id_falls_back_to_first_patch() {
        let store = store();
        let mut selection = Selection::initial(&store);
        selection.select("nope");

        let fallback = selection.resolve_active(&store).expect("falls back");
        let first = store.first().expect("store is non-empty");
        assert_eq!(fallback.id, first.id);
    }

    #[test]
    fn empty_store_resolves_to_none() {
        let empty = TimelineStore::from_json_str(
            r#"{"subject":"s","mission":"m","owner":"o","patches":[]}"#,
        )
        .expect("empty store is valid");

        let mut selection = Selection::initial(&empty);
        assert!(selection.selected_id().is_none());
        assert!(selection.resolve_active(&empty).is_none());

        selection.select("anything");
        assert!(selection.resolve_active(&empty).is_none());
    }
}
