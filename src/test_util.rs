use aws_sdk_sns::Credentials;
use aws_types::{region::Region, SdkConfig};
use flate2::{write::GzEncoder, Compression};
use std::{
    io::Write,
    sync::{Arc, Mutex},
};
use tracing::subscriber::DefaultGuard;

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(service: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{service}.us-west-1.amazonaws.com/"))
}

/// Successful SNS Publish response
pub fn publish_response(message_id: &str) -> http::Response<aws_smithy_http::body::SdkBody> {
    http::Response::builder()
        .status(200)
        .body(aws_smithy_http::body::SdkBody::from(format!(
            r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <PublishResult><MessageId>{message_id}</MessageId></PublishResult>
  <ResponseMetadata><RequestId>f187a3c1-376f-11df-8963-01868b7c937a</RequestId></ResponseMetadata>
</PublishResponse>"#
        )))
        .unwrap()
}

/// Gzip and base64 encode a payload the way CloudWatch Logs does
pub fn encode_logs(json: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes()).unwrap();
    base64::encode(encoder.finish().unwrap())
}

/// In memory log output, shared with the subscriber writing to it
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Lines logged at the given level
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.trim_start().starts_with(level))
            .map(String::from)
            .collect()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Capture the logs of the current thread until the guard is dropped
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    (buffer, tracing::subscriber::set_default(subscriber))
}

/// Auto Scaling launch event as delivered by EventBridge
pub const LAUNCH_EVENT: &str = r#"{
    "version": "0",
    "id": "12345678-1234-1234-1234-123456789012",
    "detail-type": "EC2 Instance Launch Successful",
    "source": "aws.autoscaling",
    "account": "123456789012",
    "time": "2021-03-05T12:34:56Z",
    "region": "us-west-2",
    "resources": [
        "arn:aws:autoscaling:us-west-2:123456789012:autoScalingGroup:6d2c4f5a:autoScalingGroupName/my-asg"
    ],
    "detail": {
        "StatusCode": "InProgress",
        "Description": "Launching a new EC2 instance: i-12345678",
        "AutoScalingGroupName": "my-asg",
        "ActivityId": "87654321-4321-4321-4321-210987654321",
        "Details": {
            "Availability Zone": "us-west-2b",
            "Subnet ID": "subnet-12345678"
        },
        "RequestId": "12345678-1234-1234-1234-123456789012",
        "StatusMessage": "",
        "EndTime": "2021-03-05T12:34:56Z",
        "EC2InstanceId": "i-1234567890abcdef0",
        "StartTime": "2021-03-05T12:34:21Z",
        "Cause": "At 2021-03-05T12:34:00Z an instance was started in response to a difference between desired and actual capacity."
    }
}"#;
