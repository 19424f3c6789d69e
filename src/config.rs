//! Run configuration
//!
//! Explicit configuration passed by value into the orchestrator. All inputs
//! are validated here, before the event payload is read and before any
//! network call is made.

use crate::{Result, TransitError};

/// Binds one issue type name to the status issues of that type should reach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRule {
    /// Issue type name, matched exactly against the tracker's type name
    pub issue_type: String,

    /// Target status name
    pub target_status: String,
}

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracker instance base URL
    pub base_url: String,

    /// Credential sent verbatim as the Basic Authorization header value
    pub api_token: String,

    /// Ordered type -> target status rules; first match wins
    pub rules: Vec<TransitionRule>,
}

impl Config {
    /// Build a config from raw CLI/environment values.
    ///
    /// `issuetypes` and `transitions` are comma-separated lists of equal
    /// length; entry `i` of one is paired with entry `i` of the other.
    /// Entries are split as-is, without trimming.
    pub fn from_parts(
        base_url: Option<String>,
        api_token: Option<String>,
        issuetypes: Option<String>,
        transitions: Option<String>,
    ) -> Result<Self> {
        let base_url = base_url
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TransitError::Config("JIRA_BASE_URL is not set".to_string()))?;
        let api_token = api_token
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TransitError::Config("JIRA_API_TOKEN is not set".to_string()))?;

        let issuetypes = issuetypes
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TransitError::Config("issuetypes input is not set".to_string()))?;
        let transitions = transitions
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TransitError::Config("transitions input is not set".to_string()))?;

        let rules = Self::parse_rules(&issuetypes, &transitions)?;

        Ok(Self {
            base_url,
            api_token,
            rules,
        })
    }

    /// Zip the two comma-separated lists into ordered rules
    fn parse_rules(issuetypes: &str, transitions: &str) -> Result<Vec<TransitionRule>> {
        let types: Vec<&str> = issuetypes.split(',').collect();
        let statuses: Vec<&str> = transitions.split(',').collect();

        if types.len() != statuses.len() {
            return Err(TransitError::Config(format!(
                "Length of issuetypes input ({}) does not equal length of transitions input ({})",
                types.len(),
                statuses.len()
            )));
        }

        Ok(types
            .into_iter()
            .zip(statuses)
            .map(|(issue_type, target_status)| TransitionRule {
                issue_type: issue_type.to_string(),
                target_status: target_status.to_string(),
            })
            .collect())
    }

    /// First rule whose issue type matches exactly
    pub fn rule_for(&self, issue_type: &str) -> Option<&TransitionRule> {
        self.rules.iter().find(|r| r.issue_type == issue_type)
    }

    /// Comma-separated list of configured issue type names, for error messages
    pub fn allowed_types(&self) -> String {
        self.rules
            .iter()
            .map(|r| r.issue_type.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        Config::from_parts(
            Some("https://jira.example.com".to_string()),
            Some("secret-token".to_string()),
            Some("Task,Bug".to_string()),
            Some("Test on PI,Test on PI".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_rules_are_positionally_paired() {
        let config = full_config();
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].issue_type, "Task");
        assert_eq!(config.rules[0].target_status, "Test on PI");
        assert_eq!(config.rules[1].issue_type, "Bug");
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = Config::from_parts(
            Some("https://jira.example.com".to_string()),
            Some("secret-token".to_string()),
            Some("Task,Bug".to_string()),
            Some("Test on PI".to_string()),
        );

        assert!(matches!(result, Err(TransitError::Config(_))));
    }

    #[test]
    fn test_missing_values_rejected() {
        let result = Config::from_parts(
            None,
            Some("secret-token".to_string()),
            Some("Task".to_string()),
            Some("Done".to_string()),
        );
        assert!(matches!(result, Err(TransitError::Config(_))));

        let result = Config::from_parts(
            Some("https://jira.example.com".to_string()),
            Some(String::new()),
            Some("Task".to_string()),
            Some("Done".to_string()),
        );
        assert!(matches!(result, Err(TransitError::Config(_))));
    }

    #[test]
    fn test_rule_lookup_first_match_wins() {
        let config = Config::from_parts(
            Some("https://jira.example.com".to_string()),
            Some("secret-token".to_string()),
            Some("Task,Task".to_string()),
            Some("In Review,Done".to_string()),
        )
        .unwrap();

        let rule = config.rule_for("Task").unwrap();
        assert_eq!(rule.target_status, "In Review");
    }

    #[test]
    fn test_rule_lookup_is_exact() {
        let config = full_config();
        assert!(config.rule_for("task").is_none());
        assert!(config.rule_for("Epic").is_none());
    }

    #[test]
    fn test_entries_are_not_trimmed() {
        let config = Config::from_parts(
            Some("https://jira.example.com".to_string()),
            Some("secret-token".to_string()),
            Some("Task, Bug".to_string()),
            Some("Done,Done".to_string()),
        )
        .unwrap();

        assert!(config.rule_for("Bug").is_none());
        assert!(config.rule_for(" Bug").is_some());
    }

    #[test]
    fn test_allowed_types_listing() {
        let config = full_config();
        assert_eq!(config.allowed_types(), "Task,Bug");
    }
}
