use app::AppIdCliArgs;
use clap::{Args, Parser, Subcommand};
use provider::aws::AWSConfigCliArgs;

pub mod app;
pub mod provider;

#[derive(Parser, Debug)]
#[command(
    name = "sns-topic",
    about = "Manage an AWS SNS topic: provisioning, publishing and SQS subscriptions",
    after_help = "Examples:\n  \
    sns-topic --project shop --environment dev setup --topic-id orders\n  \
    sns-topic publish --topic-id orders --message 'order created'\n  \
    sns-topic subscribe-sqs --topic-id orders --queue-arn arn:aws:sqs:us-east-1:000000000000:orders-queue"
)]
pub struct Cli {
    #[command(flatten)]
    pub app_args: AppIdCliArgs,

    #[command(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make sure the topic exists and print its ARN
    Setup {
        #[command(flatten)]
        topic: TopicCliArgs,
    },
    /// Publish a message to the topic
    Publish {
        #[command(flatten)]
        topic: TopicCliArgs,

        /// The message body
        #[arg(long)]
        message: String,
    },
    /// Subscribe an SQS queue to the topic, unless it already is
    SubscribeSqs {
        #[command(flatten)]
        topic: TopicCliArgs,

        #[command(flatten)]
        queue: QueueCliArgs,
    },
    /// List every subscription of the topic
    ListSubscriptions {
        #[command(flatten)]
        topic: TopicCliArgs,
    },
}

#[derive(Debug, Clone, Args)]
pub struct TopicCliArgs {
    /// Logical name of the topic, appended to the application identity
    #[arg(env = "SNS_TOPIC_ID", long)]
    pub topic_id: String,
}

/// The queue to subscribe, either by ARN or by URL.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct QueueCliArgs {
    /// ARN of the queue: arn:aws:sqs:region:accountID:name
    #[arg(long)]
    pub queue_arn: Option<String>,

    /// URL of the queue; its ARN is looked up through SQS
    #[arg(long)]
    pub queue_url: Option<String>,
}
