use clap::Parser as _;
use dotenvy::dotenv;
use sns_topic::cli::{Cli, Commands, QueueCliArgs, TopicCliArgs};
use sns_topic::config::AwsConfigProvider;
use sns_topic::core::client::queue::sqs::parse_queue_arn;
use sns_topic::types::params::{AppId, TopicSettings};
use sns_topic::utils::logging::init_logging;
use sns_topic::{Topic, TopicResult};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    init_logging()?;
    let cli = Cli::parse();
    debug!("Executing command with args: {:?}", cli);

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let provider = AwsConfigProvider::from_args(cli.app_args, cli.aws_config_args).await;
    if let Err(e) = run_command(&provider, cli.command, &cancel).await {
        error!(error = %e, error_chain = ?e, "sns-topic command failed");
        return Err(e.into());
    }
    Ok(())
}

async fn run_command(provider: &AwsConfigProvider, command: Commands, cancel: &CancellationToken) -> TopicResult<()> {
    match command {
        Commands::Setup { topic } => {
            let topic = open_topic(provider, topic).await?;
            info!(topic_arn = %topic.arn(), "Topic setup completed successfully");
        }
        Commands::Publish { topic, message } => {
            let topic = open_topic(provider, topic).await?;
            topic.publish(cancel, Some(message)).await?;
            info!(topic_arn = %topic.arn(), "Message published");
        }
        Commands::SubscribeSqs { topic, queue } => {
            let queue_arn = resolve_queue_arn(provider, queue).await?;
            let topic = open_topic(provider, topic).await?;
            topic.subscribe_sqs(cancel, &queue_arn).await?;
        }
        Commands::ListSubscriptions { topic } => {
            let topic = open_topic(provider, topic).await?;
            let subscriptions = topic.list_subscriptions(cancel).await?;
            info!(topic_arn = %topic.arn(), count = subscriptions.len(), "Listed subscriptions");
            for subscription in subscriptions {
                info!(
                    subscription_arn = ?subscription.subscription_arn,
                    protocol = ?subscription.protocol,
                    endpoint = ?subscription.endpoint,
                    "subscription"
                );
            }
        }
    }
    Ok(())
}

/// A topic that can't be provisioned is fatal for every command: the error
/// is returned to `main`, which exits with a failure status.
async fn open_topic(provider: &AwsConfigProvider, args: TopicCliArgs) -> TopicResult<Topic> {
    Topic::new(provider, TopicSettings::new(AppId::default(), args.topic_id)).await
}

async fn resolve_queue_arn(provider: &AwsConfigProvider, queue: QueueCliArgs) -> TopicResult<String> {
    let arn = match (queue.queue_arn, queue.queue_url) {
        (Some(queue_arn), _) => parse_queue_arn(&queue_arn)?,
        (None, Some(queue_url)) => provider.sqs().get_queue_arn_from_url(&queue_url).await?,
        (None, None) => {
            return Err(sns_topic::TopicError::Configuration("either --queue-arn or --queue-url is required".into()))
        }
    };
    Ok(arn.to_string())
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received ctrl+c, cancelling");
        cancel.cancel();
    }
}
