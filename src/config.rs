use crate::error::RuntimeError;

const SNS_ARN: &str = "SNS_ARN";
const SLACK_CHANNEL: &str = "SLACK_CHANNEL";
const WEBHOOK_URL: &str = "WEBHOOK_URL";

/// `RelayConfig` holds the settings of the log relay function
#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    /// Topic that receives one message per log entry
    pub sns_arn: String,
}

impl RelayConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<RelayConfig, RuntimeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<RelayConfig, RuntimeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(RelayConfig {
            sns_arn: required(&lookup, SNS_ARN)?,
        })
    }
}

/// `NotifierConfig` holds the settings of the status notifier function
#[derive(Clone, Debug, PartialEq)]
pub struct NotifierConfig {
    /// Slack channel the message is posted to
    pub slack_channel: String,
    /// Slack incoming webhook
    pub webhook_url: String,
}

impl NotifierConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<NotifierConfig, RuntimeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<NotifierConfig, RuntimeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(NotifierConfig {
            // an empty channel lets the webhook post to its default channel
            slack_channel: lookup(SLACK_CHANNEL)
                .ok_or_else(|| RuntimeError::MissingEnv(SLACK_CHANNEL.into()))?,
            webhook_url: required(&lookup, WEBHOOK_URL)?,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, RuntimeError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RuntimeError::MissingEnv(key.into()))
}
