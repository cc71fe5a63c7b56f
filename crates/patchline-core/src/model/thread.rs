use serde::{Deserialize, Serialize};

/// One stage of a narrative thread, pinned to a patch.
///
/// Stage order is narrative order; it is not required to match patch
/// timestamp order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadStage {
    pub patch_id: String,
    pub statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflection: Option<String>,
}

/// A narrative arc traced across several patches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyThread {
    pub id: String,
    pub title: String,
    pub arc: String,
    pub stages: Vec<ThreadStage>,
}

impl JourneyThread {
    /// Index of the stage pinned to `patch_id`, if any.
    #[must_use]
    pub fn active_stage(&self, patch_id: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.patch_id == patch_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{JourneyThread, ThreadStage};

    fn thread() -> JourneyThread {
        JourneyThread {
            id: "thread-1".into(),
            title: "From escalation loops to distributed stewardship".into(),
            arc: "Replacing the central routing node.".into(),
            stages: vec![
                ThreadStage {
                    patch_id: "patch-a".into(),
                    statement: "All decisions route through one person.".into(),
                    inflection: Some("Recognizes the bottleneck.".into()),
                },
                ThreadStage {
                    patch_id: "patch-b".into(),
                    statement: "Stewards decide without waiting.".into(),
                    inflection: None,
                },
            ],
        }
    }

    #[test]
    fn active_stage_finds_pinned_patch() {
        let t = thread();
        assert_eq!(t.active_stage("patch-a"), Some(0));
        assert_eq!(t.active_stage("patch-b"), Some(1));
        assert_eq!(t.active_stage("patch-z"), None);
    }

    #[test]
    fn stage_json_omits_missing_inflection() {
        let t = thread();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"patchId\":\"patch-a\""));
        assert_eq!(json.matches("\"inflection\"").count(), 1);
    }
}
