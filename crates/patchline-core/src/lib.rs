#![forbid(unsafe_code)]
//! patchline-core library.
//!
//! The data model and immutable [`store::TimelineStore`] for a knowledge
//! evolution timeline: an ordered sequence of narrative patches, each pinned
//! to a point in time and a confidence level.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::StoreError`] for construction-time
//!   validation; `anyhow::Result` belongs to callers.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod error;
pub mod model;
pub mod store;
pub mod time;
