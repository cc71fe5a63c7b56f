#![forbid(unsafe_code)]
//! patchline-view library.
//!
//! The selection and derivation layer: one mutable cell (the selected patch
//! id) and pure read functions that compute every derived view value from
//! the `(store, selection)` pair. Nothing here mutates the store.
//!
//! # Conventions
//!
//! - **Errors**: none. Derivations are total; the empty store degenerates to
//!   empty output, never to a panic.
//! - **Logging**: use `tracing` macros where a derivation is worth tracing.

pub mod backlog;
pub mod color;
pub mod delta;
pub mod scene;
pub mod selection;

pub use backlog::{backlog, group_by_horizon, BacklogEntry, HorizonBoard};
pub use color::{confidence_color, Rgba};
pub use delta::{describe_confidence, describe_delta, momentum_label, ConfidenceDelta, Tone};
pub use scene::{cluster_scene, ClusterScene};
pub use selection::Selection;
