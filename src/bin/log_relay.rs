use cloudwatch_event_adapters::{handle_logs, init_tracing, LogsEvent, RelayConfig, SnsClient};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let relay_config = RelayConfig::from_env()?;

    // Get AWS Configuration
    let config = aws_config::load_from_env().await;
    let sns_client = SnsClient::new(&config, &relay_config.sns_arn);

    run(service_fn(|event: LambdaEvent<LogsEvent>| {
        handle_logs(&sns_client, event)
    }))
    .await
}
