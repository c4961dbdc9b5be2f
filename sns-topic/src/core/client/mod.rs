pub mod notification;
pub mod queue;

pub use notification::sns::SNS;
pub use notification::NotificationClient;
pub use queue::sqs::InnerSQS;
