use crate::cli::app::AppIdCliArgs;

/// Application identity a topic belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppId {
    pub project: String,
    pub environment: String,
    pub family: String,
    pub application: String,
}

impl AppId {
    pub fn new(
        project: impl Into<String>,
        environment: impl Into<String>,
        family: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
            family: family.into(),
            application: application.into(),
        }
    }

    /// Copy each field from `defaults` that is still empty here. Fields that
    /// are already set are left untouched.
    pub fn pad_from(&mut self, defaults: &AppId) {
        fn pad(field: &mut String, default: &str) {
            if field.is_empty() {
                *field = default.to_string();
            }
        }

        pad(&mut self.project, &defaults.project);
        pad(&mut self.environment, &defaults.environment);
        pad(&mut self.family, &defaults.family);
        pad(&mut self.application, &defaults.application);
    }
}

impl From<AppIdCliArgs> for AppId {
    fn from(args: AppIdCliArgs) -> Self {
        Self {
            project: args.project.unwrap_or_default(),
            environment: args.environment.unwrap_or_default(),
            family: args.family.unwrap_or_default(),
            application: args.application.unwrap_or_default(),
        }
    }
}
