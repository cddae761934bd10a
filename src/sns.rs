use crate::{error::RuntimeError, event::LogEntry};
use aws_sdk_sns::{Client, Error};
use serde::Serialize;

/// Body published for every log entry. SNS sends `default`
/// to every protocol when `MessageStructure` is `json`.
#[derive(Serialize)]
struct Notification {
    default: String,
}

/// SNS client implementation.
pub struct SnsClient {
    pub(crate) inner: Client,
    pub(crate) topic_arn: String,
}

impl SnsClient {
    /// Initialize the SNS client for a single topic.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &aws_types::SdkConfig, topic_arn: &str) -> SnsClient {
        tracing::info!("Initializing SNS client");
        let inner = Client::new(config);
        SnsClient {
            inner,
            topic_arn: topic_arn.into(),
        }
    }

    /// Publish one log entry to the topic.
    /// Returns the message id assigned by SNS.
    #[tracing::instrument(skip(self, entry), fields(entry_id = entry_id(entry)))]
    pub async fn publish_entry(&self, entry: &LogEntry) -> Result<String, RuntimeError> {
        let res = self
            .inner
            .publish()
            .topic_arn(&self.topic_arn)
            .message(notification_body(entry)?)
            .message_structure("json")
            .send()
            .await
            .map_err(Error::from)?;

        Ok(res.message_id.unwrap_or_default())
    }
}

fn entry_id(entry: &LogEntry) -> Option<&str> {
    entry.get("id").and_then(|id| id.as_str())
}

fn notification_body(entry: &LogEntry) -> Result<String, RuntimeError> {
    let notification = Notification {
        default: serde_json::to_string(entry)?,
    };
    Ok(serde_json::to_string(&notification)?)
}
