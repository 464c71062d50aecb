use anyhow::Context;
use survey_config::SurveyConfig;
use survey_core::page::PageRequest;
use survey_db::SurveyDb;
use survey_db::service::SurveyService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SurveyService,
    pub config: SurveyConfig,
}

impl AppContext {
    /// Open the store named by `--database`, falling back to `database.path`.
    pub async fn init(config: SurveyConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = flags
            .database
            .as_deref()
            .unwrap_or(&config.database.path)
            .to_string();

        tracing::debug!(path = %path, "opening survey store");
        let db = SurveyDb::open_local_with_timeout(&path, config.database.busy_timeout())
            .await
            .with_context(|| format!("failed to open database at {path}"))?;

        Ok(Self {
            service: SurveyService::new(db),
            config,
        })
    }

    /// Build a page window from `skip`, the global `--limit`, and the configured default.
    #[must_use]
    pub fn page(&self, skip: u32, flags: &GlobalFlags) -> PageRequest {
        let limit = flags.limit.unwrap_or(self.config.general.default_limit);
        PageRequest::new(skip, limit)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use survey_config::SurveyConfig;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(limit: Option<u32>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: false,
            verbose: false,
            database: Some(String::from(":memory:")),
        }
    }

    #[tokio::test]
    async fn database_flag_overrides_config_path() {
        let ctx = AppContext::init(SurveyConfig::default(), &flags(None))
            .await
            .expect("in-memory store should open");
        let user = ctx.service.create_user("Ann", "staff").await.unwrap();
        assert_eq!(ctx.service.get_user(user.id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn page_prefers_limit_flag_then_config() {
        let mut config = SurveyConfig::default();
        config.general.default_limit = 7;
        let ctx = AppContext::init(config, &flags(None)).await.unwrap();

        assert_eq!(ctx.page(3, &flags(None)).limit(), 7);
        assert_eq!(ctx.page(3, &flags(Some(2))).limit(), 2);
        assert_eq!(ctx.page(3, &flags(Some(1000))).limit(), 100);
        assert_eq!(ctx.page(3, &flags(None)).skip(), 3);
    }
}
