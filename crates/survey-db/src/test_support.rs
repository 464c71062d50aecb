//! Shared test utilities for survey-db unit tests.

pub(crate) mod helpers {
    use serde_json::json;
    use survey_core::entities::{Form, User};

    use crate::service::SurveyService;

    /// Create an in-memory `SurveyService`.
    pub async fn test_service() -> SurveyService {
        SurveyService::new_local(":memory:").await.unwrap()
    }

    /// Create a user with a fixed category.
    pub async fn seed_user(svc: &SurveyService, name: &str) -> User {
        svc.create_user(name, "staff").await.unwrap()
    }

    /// Create a draft form with a small structure document.
    pub async fn seed_form(svc: &SurveyService, title: &str) -> Form {
        svc.create_form(title, "desc", &json!({"q": [1]}), "survey")
            .await
            .unwrap()
    }
}
