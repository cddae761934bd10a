use cloudwatch_event_adapters::{
    handle_lifecycle_event, init_tracing, LifecycleEvent, NotifierConfig, SlackClient,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = NotifierConfig::from_env()?;
    let slack_client = SlackClient::new(&config.webhook_url, &config.slack_channel);

    run(service_fn(|event: LambdaEvent<LifecycleEvent>| {
        handle_lifecycle_event(&slack_client, event)
    }))
    .await
}
