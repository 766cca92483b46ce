//! Read-only configuration for case progression.
//!
//! Configuration is a flat set of named offsets and feature flags supplied
//! once at startup and shared read-only by every pipeline run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offsets and feature flags used by progression rules.
///
/// # Examples
///
/// ```
/// use decree::config::CaseConfig;
///
/// let config = CaseConfig::from_json_str(r#"{ "holdingPeriodInWeeks": 6 }"#)
///     .expect("valid configuration");
/// assert_eq!(config.holding_period_in_weeks, 6);
/// assert_eq!(config.sole_due_date_offset_days, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseConfig {
    /// Days after issue a sole respondent has to acknowledge service.
    pub sole_due_date_offset_days: u32,
    /// Days after issue (or reissue) for a solicitor-served AoS pack.
    pub aos_pack_due_date_offset_days: u32,
    /// Length of the holding period.
    pub holding_period_in_weeks: u32,
    /// Days after a disputed acknowledgement for the answer to be filed.
    pub dispute_due_date_offset_days: u32,
    /// Days after conditional order pronouncement before a final order may
    /// be applied for.
    pub final_order_eligibility_offset_days: u32,
    /// Months after applicant eligibility before a sole respondent may apply.
    pub respondent_final_order_offset_months: u32,
    /// Months after conditional order pronouncement before a final order
    /// application is overdue.
    pub final_order_overdue_offset_months: u32,
    /// Divert Welsh submissions to translation review.
    pub welsh_translation_review: bool,
    /// Send letters to offline parties.
    pub postal_notifications: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            sole_due_date_offset_days: 16,
            aos_pack_due_date_offset_days: 16,
            holding_period_in_weeks: 20,
            dispute_due_date_offset_days: 37,
            final_order_eligibility_offset_days: 43,
            respondent_final_order_offset_months: 3,
            final_order_overdue_offset_months: 12,
            welsh_translation_review: true,
            postal_notifications: true,
        }
    }
}

impl CaseConfig {
    /// Parses configuration from JSON, defaulting omitted keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would make progression rules meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.holding_period_in_weeks == 0 {
            return Err(ConfigError::InvalidValue {
                key: "holdingPeriodInWeeks",
                reason: "must be at least one week",
            });
        }
        if self.final_order_overdue_offset_months == 0 {
            return Err(ConfigError::InvalidValue {
                key: "finalOrderOverdueOffsetMonths",
                reason: "must be at least one month",
            });
        }
        Ok(())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid case configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its permitted range.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::{CaseConfig, ConfigError};
    use rstest::rstest;

    #[rstest]
    fn empty_document_yields_defaults() {
        let config = CaseConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, CaseConfig::default());
    }

    #[rstest]
    fn camel_case_keys_override_defaults() {
        let config = CaseConfig::from_json_str(
            r#"{ "soleDueDateOffsetDays": 21, "postalNotifications": false }"#,
        )
        .expect("config should parse");

        assert_eq!(config.sole_due_date_offset_days, 21);
        assert!(!config.postal_notifications);
        assert_eq!(config.holding_period_in_weeks, 20);
    }

    #[rstest]
    fn zero_holding_period_is_rejected() {
        let result = CaseConfig::from_json_str(r#"{ "holdingPeriodInWeeks": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "holdingPeriodInWeeks",
                ..
            })
        ));
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        let result = CaseConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
