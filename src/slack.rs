use crate::{error::DeliveryError, lifecycle::LifecycleEvent};
use serde::Serialize;

/// `ChatMessage` is the JSON body accepted by Slack incoming webhooks
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
    /// Channel the message is posted to
    pub channel: String,
    /// Message text
    pub text: String,
}

/// Slack incoming webhook client.
pub struct SlackClient {
    inner: reqwest::Client,
    webhook_url: String,
    channel: String,
}

impl SlackClient {
    /// Initialize the webhook client for a single channel.
    #[tracing::instrument(skip(webhook_url))]
    pub fn new(webhook_url: &str, channel: &str) -> SlackClient {
        tracing::info!("Initializing Slack client");
        SlackClient {
            inner: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
            channel: channel.into(),
        }
    }

    /// Build the message describing a lifecycle event.
    pub fn message_for(&self, event: &LifecycleEvent) -> ChatMessage {
        ChatMessage {
            channel: self.channel.clone(),
            text: event.to_text(),
        }
    }

    /// Post a message to the webhook.
    /// Any status outside of 2xx is returned as `DeliveryError::Status`.
    #[tracing::instrument(skip(self, message))]
    pub async fn post(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
        let res = self
            .inner
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().into(),
            });
        }

        res.bytes().await?;
        Ok(())
    }
}
