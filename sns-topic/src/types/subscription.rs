/// Delivery protocol tag used for SQS queue subscriptions
pub const SQS_PROTOCOL: &str = "sqs";

/// A binding from a topic to a consumer endpoint, as reported by SNS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscription {
    pub subscription_arn: Option<String>,
    pub owner: Option<String>,
    pub protocol: Option<String>,
    pub endpoint: Option<String>,
    pub topic_arn: Option<String>,
}

impl Subscription {
    /// Exact string comparison against the subscribed endpoint. A subscription
    /// without an endpoint never matches.
    pub fn has_endpoint(&self, endpoint: &str) -> bool {
        self.endpoint.as_deref() == Some(endpoint)
    }
}

impl From<&aws_sdk_sns::types::Subscription> for Subscription {
    fn from(subscription: &aws_sdk_sns::types::Subscription) -> Self {
        Self {
            subscription_arn: subscription.subscription_arn().map(str::to_string),
            owner: subscription.owner().map(str::to_string),
            protocol: subscription.protocol().map(str::to_string),
            endpoint: subscription.endpoint().map(str::to_string),
            topic_arn: subscription.topic_arn().map(str::to_string),
        }
    }
}

/// One page of a `ListSubscriptionsByTopic` response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionPage {
    pub subscriptions: Vec<Subscription>,
    pub next_token: Option<String>,
}
