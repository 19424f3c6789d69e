//! Push event payload
//!
//! Models the slice of the CI push event this tool consumes: the commits
//! contained in the push and their messages. The CI host writes the full
//! payload to a JSON file and points to it with an environment variable.

use crate::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One commit entry in the push event
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    /// Full commit message
    pub message: String,
}

/// Push event payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushEvent {
    /// Commits contained in the push, in order
    #[serde(default)]
    pub commits: Vec<Commit>,
}

impl PushEvent {
    /// Load the event payload from the JSON file the CI host wrote
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// All commit messages, space-joined, in commit order
    pub fn combined_messages(&self) -> String {
        self.commits
            .iter()
            .map(|c| c.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
