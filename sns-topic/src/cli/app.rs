use clap::Args;

/// Application identity used to name topics.
/// Topic names are built as `{project}-{environment}-{family}-{application}-{topic_id}`.
#[derive(Debug, Clone, Default, Args)]
pub struct AppIdCliArgs {
    #[arg(env = "SNS_TOPIC_PROJECT", long, global = true)]
    pub project: Option<String>,

    #[arg(env = "SNS_TOPIC_ENVIRONMENT", long, global = true)]
    pub environment: Option<String>,

    #[arg(env = "SNS_TOPIC_FAMILY", long, global = true)]
    pub family: Option<String>,

    #[arg(env = "SNS_TOPIC_APPLICATION", long, global = true)]
    pub application: Option<String>,
}
