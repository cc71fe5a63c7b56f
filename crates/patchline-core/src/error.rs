use thiserror::Error;

/// Construction-time validation failures for a timeline store.
///
/// The store refuses to exist in an invalid state; after construction no
/// operation can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate patch id '{id}'")]
    DuplicatePatchId { id: String },

    #[error("patch '{id}' timestamp '{timestamp}' is not after its predecessor '{previous}'")]
    OutOfOrderTimestamp {
        id: String,
        timestamp: String,
        previous: String,
    },

    #[error("confidence {value} on '{owner}' is outside [0, 1]")]
    ConfidenceOutOfRange { owner: String, value: f64 },

    #[error("thread '{thread_id}' stage references unknown patch '{patch_id}'")]
    DanglingThreadStage { thread_id: String, patch_id: String },

    #[error("failed to parse timeline data")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read timeline data from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
