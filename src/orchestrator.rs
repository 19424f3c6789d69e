//! Transition orchestration
//!
//! The decision core: extracts issue keys from the pushed commit messages,
//! classifies each referenced issue against the configured rules, and
//! applies the resolved transitions in discovery order.

use crate::config::Config;
use crate::event::PushEvent;
use crate::jira::{JiraClient, JiraTransition};
use crate::transport::Transport;
use crate::{Result, TransitError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::info;

lazy_static! {
    static ref ISSUE_KEY_RE: Regex =
        Regex::new(r"([a-zA-Z0-9]+-[0-9]+)").expect("issue key pattern is valid");
}

/// A transition resolved during classification, awaiting apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    /// Issue to transition
    pub key: String,

    /// Tracker transition id
    pub id: String,

    /// Tracker transition name
    pub name: String,
}

/// Classification outcome for one issue key
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    /// A transition was resolved and should be applied
    Pending(PendingTransition),

    /// The issue is already in its target status
    AlreadyInTarget { status: String },
}

/// What a completed run did
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Transitions applied, in discovery order
    pub applied: Vec<PendingTransition>,

    /// Issues that were already in their target status
    pub already_in_target: usize,
}

/// Drives a single run: classify every referenced issue, then apply
pub struct Orchestrator {
    config: Config,
    jira: JiraClient,
}

impl Orchestrator {
    /// Build an orchestrator from an owned configuration
    pub fn new(config: Config) -> Result<Self> {
        let transport = Transport::new(&config.base_url, &config.api_token)?;

        Ok(Self {
            jira: JiraClient::new(transport),
            config,
        })
    }

    /// Process the push event end to end.
    ///
    /// Classification failures are accumulated per issue and reported
    /// together after the apply phase; one issue's failure never stops the
    /// classification of the others. Apply failures abort the remaining
    /// applies and propagate immediately.
    pub async fn run(&self, event: &PushEvent) -> Result<RunSummary> {
        let messages = event.combined_messages();
        info!(messages = %messages, "Commit messages");

        let keys = extract_issue_keys(&messages)?;
        info!(keys = %keys.join(" "), "Found issue keys");

        let mut pending = Vec::new();
        let mut errors = Vec::new();
        let mut already_in_target = 0;

        for key in &keys {
            match self.classify_issue(key).await {
                Ok(Outcome::Pending(transition)) => pending.push(transition),
                Ok(Outcome::AlreadyInTarget { status }) => {
                    info!(key = %key, status = %status, "Issue is already in target status");
                    already_in_target += 1;
                }
                Err(reason) => errors.push(reason),
            }
        }

        let mut applied = Vec::new();
        for transition in pending {
            info!(key = %transition.key, transition = %transition.name, "Applying transition");
            self.jira
                .transition_issue(&transition.key, &transition.id)
                .await?;
            applied.push(transition);
        }

        // Classification errors are reported even when some transitions
        // were already applied above.
        if !errors.is_empty() {
            return Err(TransitError::TransitionErrors(errors.join("\n")));
        }

        Ok(RunSummary {
            applied,
            already_in_target,
        })
    }

    /// Classify one issue key against the configured rules.
    ///
    /// Returns `Err` with a human-readable reason when the issue cannot be
    /// transitioned; the caller accumulates these without stopping the batch.
    async fn classify_issue(&self, key: &str) -> std::result::Result<Outcome, String> {
        let issue = self
            .jira
            .get_issue(key)
            .await
            .map_err(|e| format!("Issue \"{}\" encountered an error: {}", key, e))?;

        let type_name = &issue.fields.issue_type.name;
        let status_name = &issue.fields.status.name;

        let rule = match self.config.rule_for(type_name) {
            Some(rule) => rule,
            None => {
                return Err(format!(
                    "Issue \"{}\" is of type \"{}\" that is not allowed for transition. Allowed issue types are {}",
                    key,
                    type_name,
                    self.config.allowed_types()
                ));
            }
        };

        if status_name == &rule.target_status {
            return Ok(Outcome::AlreadyInTarget {
                status: status_name.clone(),
            });
        }

        let available = self
            .jira
            .get_issue_transitions(key)
            .await
            .map_err(|e| format!("Issue \"{}\" encountered an error: {}", key, e))?;

        match find_transition(&available, &rule.target_status) {
            Some(transition) => Ok(Outcome::Pending(PendingTransition {
                key: key.to_string(),
                id: transition.id.clone(),
                name: transition.name.clone(),
            })),
            None => Err(format!(
                "For {}, cannot find transition \"{}\" among {:?}",
                key,
                rule.target_status,
                available
                    .iter()
                    .map(|t| t.to.name.as_str())
                    .collect::<Vec<_>>()
            )),
        }
    }
}

/// Extract issue keys from free text, deduplicated in first-occurrence order
fn extract_issue_keys(text: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let keys: Vec<String> = ISSUE_KEY_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|key| seen.insert(key.clone()))
        .collect();

    if keys.is_empty() {
        return Err(TransitError::NoIssueKeys);
    }

    Ok(keys)
}

/// First candidate whose target status matches case-insensitively
fn find_transition<'a>(
    candidates: &'a [JiraTransition],
    target_status: &str,
) -> Option<&'a JiraTransition> {
    let wanted = target_status.to_lowercase();
    candidates.iter().find(|t| t.to.name.to_lowercase() == wanted)
}
