#![deny(missing_docs)]
//! <fullname>CloudWatch event adapters</fullname>
//!
//! Two Lambda functions that forward AWS events:
//! the log relay republishes every CloudWatch Logs entry
//! to an SNS topic, and the status notifier posts
//! Auto Scaling lifecycle events to a Slack channel.
mod config;
pub use config::{NotifierConfig, RelayConfig};

mod error;
pub use error::{DeliveryError, RuntimeError};

mod event;
pub use event::{LogEntry, LogsEvent};

mod lifecycle;
pub use lifecycle::LifecycleEvent;

mod notifier;
pub use notifier::handle_lifecycle_event;

mod relay;
pub use relay::handle_logs;

mod slack;
pub use slack::{ChatMessage, SlackClient};

mod sns;
pub use sns::SnsClient;

#[cfg(test)]
mod test_util;

/// Initialize the log subscriber shared by both functions.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();
}
