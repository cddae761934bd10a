use crate::{error::RuntimeError, event::LogsEvent, sns::SnsClient};
use lambda_runtime::LambdaEvent;

/// `handle_logs` is the Lambda function entry point
/// that receives the events from CloudWatch Logs.
///
/// Every entry is published on its own, in the order CloudWatch sent them.
/// The first failed publish fails the invocation and
/// the remaining entries are not sent.
#[tracing::instrument(skip(sns_client, event), fields(request_id = %event.context.request_id))]
pub async fn handle_logs(
    sns_client: &SnsClient,
    event: LambdaEvent<LogsEvent>,
) -> Result<(), RuntimeError> {
    let data = event.payload.aws_logs.data;

    tracing::info!(
        log_group = %data.log_group,
        log_stream = %data.log_stream,
        entries = data.log_events.len(),
        "relaying log events"
    );

    for entry in &data.log_events {
        let message_id = sns_client.publish_entry(entry).await?;
        tracing::debug!(%message_id, "log entry published");
    }

    Ok(())
}
