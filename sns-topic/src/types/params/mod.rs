pub mod app_id;
pub mod arn;

pub use app_id::AppId;
pub use arn::ARN;

/// Maximum length SNS accepts for a topic name, including a FIFO suffix
pub const MAX_TOPIC_NAME_LENGTH: usize = 256;

/// Suffix SNS requires on the name of every FIFO topic
pub const FIFO_TOPIC_SUFFIX: &str = ".fifo";

/// TopicSettings - identifies a topic
///
/// `arn` stays empty until the topic has been provisioned. The manager never
/// hands out a mutable reference to it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSettings {
    pub app_id: AppId,
    pub topic_id: String,
    pub arn: String,
}

impl TopicSettings {
    pub fn new(app_id: AppId, topic_id: impl Into<String>) -> Self {
        Self { app_id, topic_id: topic_id.into(), arn: String::new() }
    }

    /// Fill every empty identity field from the given defaults.
    pub fn pad_from(&mut self, defaults: &AppId) {
        self.app_id.pad_from(defaults);
    }

    /// Physical topic name: `{project}-{environment}-{family}-{application}-{topic_id}`.
    /// Empty parts are skipped.
    pub fn topic_name(&self) -> String {
        let app = &self.app_id;
        [app.project.as_str(), app.environment.as_str(), app.family.as_str(), app.application.as_str()]
            .into_iter()
            .chain(std::iter::once(self.topic_id.as_str()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// AWS SNS topic name requirements:
    /// - Can include numbers, letters, hyphens, and underscores
    /// - FIFO topics end with `.fifo`
    /// - Length between 1 and 256, suffix included
    pub fn is_valid_topic_name(name: &str) -> bool {
        if name.len() > MAX_TOPIC_NAME_LENGTH {
            return false;
        }

        let base = name.strip_suffix(FIFO_TOPIC_SUFFIX).unwrap_or(name);
        !base.is_empty() && base.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}
