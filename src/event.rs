use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;
use std::io::BufReader;

/// `LogsEvent` represents the raw event sent by CloudWatch
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LogsEvent {
    // aws_logs is gzipped and base64 encoded, it needs a custom deserializer
    #[serde(rename = "awslogs")]
    /// Encoded log batch
    pub aws_logs: AwsLogs,
}

/// `AwsLogs` is an unmarshaled, ungzipped, CloudWatch logs event
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AwsLogs {
    #[serde(deserialize_with = "from_base64")]
    pub data: LogData,
}

/// `LogData` represents the logs group event information.
/// Only `logEvents` is required, the rest is metadata used for logging.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogData {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub log_group: String,
    #[serde(default)]
    pub log_stream: String,
    #[serde(default)]
    pub subscription_filters: Vec<String>,
    #[serde(default)]
    pub message_type: String,
    pub log_events: Vec<LogEntry>,
}

/// `LogEntry` is a log entry from cloudwatch logs, kept as received
/// so it's relayed without reordering or dropping any field.
pub type LogEntry = Value;

fn from_base64<'d, D>(deserializer: D) -> Result<LogData, D::Error>
where
    D: Deserializer<'d>,
{
    let bytes = String::deserialize(deserializer)
        .and_then(|string| base64::decode(&string).map_err(D::Error::custom))?;

    let bytes = flate2::read::GzDecoder::new(&bytes[..]);
    let mut de = serde_json::Deserializer::from_reader(BufReader::new(bytes));
    LogData::deserialize(&mut de).map_err(D::Error::custom)
}
