use crate::{
    error::{DeliveryError, RuntimeError},
    lifecycle::LifecycleEvent,
    slack::SlackClient,
};
use lambda_runtime::LambdaEvent;

/// `handle_lifecycle_event` is the Lambda function entry point
/// that receives Auto Scaling lifecycle events from EventBridge.
///
/// Delivery failures are logged and the invocation still succeeds.
#[tracing::instrument(skip(slack_client, event), fields(request_id = %event.context.request_id))]
pub async fn handle_lifecycle_event(
    slack_client: &SlackClient,
    event: LambdaEvent<LifecycleEvent>,
) -> Result<(), RuntimeError> {
    let payload = event.payload;
    tracing::info!(event = ?payload, "received lifecycle event");

    let message = slack_client.message_for(&payload);
    match slack_client.post(&message).await {
        Ok(()) => tracing::info!("message posted to {}", message.channel),
        Err(DeliveryError::Status { code, reason }) => {
            tracing::error!("request failed: {} {}", code, reason)
        }
        Err(DeliveryError::Connection(err)) => {
            tracing::error!("server connection failed: {}", err)
        }
    }

    Ok(())
}
