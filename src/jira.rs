//! Jira tracker client
//!
//! Builds the tracker-specific request paths and payloads for fetching an
//! issue, listing its available workflow transitions, and applying one.

use crate::transport::Transport;
use crate::{Result, TransitError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Jira issue representation
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
}

/// Jira issue fields
#[derive(Debug, Clone, Deserialize)]
pub struct JiraFields {
    #[serde(rename = "issuetype")]
    pub issue_type: JiraIssueType,
    pub status: JiraStatus,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueType {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraStatus {
    pub name: String,
}

/// One workflow transition currently available for an issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraTransition {
    pub id: String,
    pub name: String,
    pub to: JiraStatus,
}

#[derive(Debug, Clone, Deserialize)]
struct JiraTransitionsResponse {
    transitions: Vec<JiraTransition>,
}

#[derive(Debug, Clone, Serialize)]
struct JiraTransitionRequest {
    transition: JiraTransitionId,
}

#[derive(Debug, Clone, Serialize)]
struct JiraTransitionId {
    id: String,
}

/// Jira API client
pub struct JiraClient {
    transport: Transport,
}

impl JiraClient {
    /// Create a client over an authenticated transport
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Get a single issue by key
    pub async fn get_issue(&self, key: &str) -> Result<JiraIssue> {
        debug!(key = %key, "Fetching issue");

        self.transport
            .get(&format!("/issue/{}", key))
            .await
            .map_err(|e| match e {
                TransitError::IssueNotFound(_) => TransitError::IssueNotFound(key.to_string()),
                other => other,
            })
    }

    /// Get the transitions currently available for an issue
    ///
    /// An empty list is valid: the issue has no outgoing transitions from
    /// its present status.
    pub async fn get_issue_transitions(&self, key: &str) -> Result<Vec<JiraTransition>> {
        debug!(key = %key, "Fetching available transitions");

        let response: JiraTransitionsResponse = self
            .transport
            .get(&format!("/issue/{}/transitions", key))
            .await?;
        Ok(response.transitions)
    }

    /// Apply a transition to an issue
    pub async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<()> {
        info!(key = %key, transition_id = %transition_id, "Transitioning issue");

        let body = JiraTransitionRequest {
            transition: JiraTransitionId {
                id: transition_id.to_string(),
            },
        };

        self.transport
            .post(&format!("/issue/{}/transitions", key), &body)
            .await
    }
}
