use aws_sdk_sqs::error::SdkError;
use aws_sdk_sqs::operation::get_queue_attributes::GetQueueAttributesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Failed to get queue attributes: {0}")]
    GetQueueAttributesError(#[from] SdkError<GetQueueAttributesError>),

    #[error("Failed to get queue arn for queue url : {0}")]
    FailedToGetQueueArn(String),

    #[error("Invalid queue ARN: {0}")]
    InvalidArn(String),
}
