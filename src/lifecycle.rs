use serde::Deserialize;

/// `LifecycleEvent` is the EventBridge event sent
/// when an Auto Scaling group launches or terminates an instance
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LifecycleEvent {
    #[allow(missing_docs)]
    pub account: String,
    #[allow(missing_docs)]
    pub time: String,
    /// Event name, `EC2 Instance Launch Successful` for instance
    #[serde(rename = "detail-type")]
    pub detail_type: String,
    /// Auto Scaling specific fields
    pub detail: LifecycleDetail,
}

/// `LifecycleDetail` holds the fields of the event `detail` object we report
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleDetail {
    pub auto_scaling_group_name: String,
    pub status_code: String,
    pub cause: String,
}

impl LifecycleEvent {
    /// Render the chat text for this event.
    pub fn to_text(&self) -> String {
        format!(
            "Account: {} \n Time: {} \n AutoScalingGroup: {} \n Event: {} \n Status: {} \n Caused by: {}",
            self.account,
            self.time,
            self.detail.auto_scaling_group_name,
            self.detail_type,
            self.detail.status_code,
            self.detail.cause,
        )
    }
}
