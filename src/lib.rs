//! jira-transit - CI-driven Jira issue transitions
//!
//! Scans the commit messages of a push event for Jira issue keys, decides
//! per issue whether a workflow transition applies based on its type and
//! current status, resolves the transition against the Jira REST API, and
//! applies it. Per-issue classification failures are accumulated and
//! reported together at the end of the run instead of failing fast.
//!
//! # Architecture
//!
//! - **config**: explicit run configuration and transition rules
//! - **event**: push event payload (commit messages)
//! - **transport**: authenticated HTTP adapter for the tracker API
//! - **jira**: tracker client (issues, transitions)
//! - **orchestrator**: eligibility classification and transition apply

pub mod config;
pub mod error;
pub mod event;
pub mod jira;
pub mod logging;
pub mod orchestrator;
pub mod transport;

// Re-exports
pub use error::{Result, TransitError};
