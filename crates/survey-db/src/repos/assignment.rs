//! Assignment repository — the user/form association and its state.
//!
//! The composite primary key `(user_id, form_id)` is the source of truth for
//! uniqueness. `assign_form_to_user` probes for an existing row first, but a
//! writer that slips past the probe still hits the key and surfaces as
//! `DatabaseError::Conflict`.

use serde_json::Value;

use survey_core::entities::{Assignment, AssignmentView};
use survey_core::enums::AssignmentState;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, json_column, parse_enum, parse_optional_json, row_exists};
use crate::repos::user::fetch_user;
use crate::service::SurveyService;

fn row_to_assignment(row: &libsql::Row) -> Result<Assignment, DatabaseError> {
    Ok(Assignment {
        user_id: row.get(0)?,
        form_id: row.get(1)?,
        state: parse_enum(&row.get::<String>(2)?)?,
        begin_payload: parse_optional_json(get_opt_string(row, 3)?.as_deref())?,
        response_payload: parse_optional_json(get_opt_string(row, 4)?.as_deref())?,
    })
}

fn row_to_view(row: &libsql::Row) -> Result<AssignmentView, DatabaseError> {
    Ok(AssignmentView {
        form_id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        form_state: parse_enum(&row.get::<String>(4)?)?,
        user_form_state: parse_enum(&row.get::<String>(5)?)?,
        begin_payload: parse_optional_json(get_opt_string(row, 6)?.as_deref())?,
        response_payload: parse_optional_json(get_opt_string(row, 7)?.as_deref())?,
    })
}

async fn fetch_assignment(
    conn: &libsql::Connection,
    user_id: i64,
    form_id: i64,
) -> Result<Option<Assignment>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT user_id, form_id, state, begin_payload, response_payload
             FROM assignments WHERE user_id = ?1 AND form_id = ?2",
            [user_id, form_id],
        )
        .await?;
    rows.next()
        .await?
        .map(|row| row_to_assignment(&row))
        .transpose()
}

async fn insert_assignment(
    conn: &libsql::Connection,
    user_id: i64,
    form_id: i64,
    begin_payload: Option<&Value>,
) -> Result<bool, DatabaseError> {
    let user_exists = row_exists(conn, "SELECT 1 FROM users WHERE id = ?1", [user_id]).await?;
    let form_exists = row_exists(conn, "SELECT 1 FROM forms WHERE id = ?1", [form_id]).await?;
    if !user_exists || !form_exists {
        tracing::debug!(user_id, form_id, user_exists, form_exists, "assign: parent missing");
        return Ok(false);
    }

    let already_assigned = row_exists(
        conn,
        "SELECT 1 FROM assignments WHERE user_id = ?1 AND form_id = ?2",
        [user_id, form_id],
    )
    .await?;
    if already_assigned {
        tracing::debug!(user_id, form_id, "assign: pair already assigned");
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO assignments (user_id, form_id, state, begin_payload, response_payload)
         VALUES (?1, ?2, ?3, ?4, NULL)",
        libsql::params![
            user_id,
            form_id,
            AssignmentState::Initial.as_str(),
            json_column(begin_payload)?
        ],
    )
    .await?;
    Ok(true)
}

async fn select_views_for_user(
    conn: &libsql::Connection,
    user_id: i64,
) -> Result<Vec<AssignmentView>, DatabaseError> {
    if fetch_user(conn, user_id).await?.is_none() {
        tracing::debug!(user_id, "listing assignments of unknown user");
        return Ok(Vec::new());
    }

    let mut rows = conn
        .query(
            "SELECT f.id, f.title, f.description, f.category, f.state,
                    a.state, a.begin_payload, a.response_payload
             FROM assignments a
             JOIN forms f ON f.id = a.form_id
             WHERE a.user_id = ?1
             ORDER BY f.id",
            [user_id],
        )
        .await?;

    let mut views = Vec::new();
    while let Some(row) = rows.next().await? {
        views.push(row_to_view(&row)?);
    }
    Ok(views)
}

impl SurveyService {
    /// Assign a form to a user with an optional begin payload.
    ///
    /// Returns `false` when the user or form does not exist, or when the pair
    /// is already assigned. On success the assignment starts in `initial`
    /// with no response payload.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` if a concurrent writer inserted the
    /// same pair first, or another `DatabaseError` on storage failure.
    pub async fn assign_form_to_user(
        &self,
        user_id: i64,
        form_id: i64,
        begin_payload: Option<Value>,
    ) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_assignment(uow.conn(), user_id, form_id, begin_payload.as_ref()).await;
        let assigned = uow.finish(result).await?;
        if assigned {
            tracing::debug!(user_id, form_id, "form assigned");
        }
        Ok(assigned)
    }

    /// Set an assignment's state, and its response payload when one is given.
    ///
    /// A `state` outside `initial | in_progress | finished | analyzed` returns
    /// `false` without touching storage. `None` (or JSON `null`) for
    /// `response_payload` leaves the stored payload as it was. Returns
    /// `false` if the pair is not assigned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn update_assignment_state(
        &self,
        user_id: i64,
        form_id: i64,
        state: &str,
        response_payload: Option<Value>,
    ) -> Result<bool, DatabaseError> {
        let state = match state.parse::<AssignmentState>() {
            Ok(state) => state,
            Err(error) => {
                tracing::debug!(user_id, form_id, %error, "rejecting assignment state");
                return Ok(false);
            }
        };
        let response = json_column(response_payload.as_ref())?;

        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute(
                "UPDATE assignments
                 SET state = ?1, response_payload = COALESCE(?2, response_payload)
                 WHERE user_id = ?3 AND form_id = ?4",
                libsql::params![state.as_str(), response, user_id, form_id],
            )
            .await
            .map_err(DatabaseError::from);
        let updated = uow.finish(result).await? > 0;
        tracing::debug!(user_id, form_id, %state, updated, "assignment state update");
        Ok(updated)
    }

    /// Fetch one assignment by its composite key. `None` if not assigned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn get_assignment(
        &self,
        user_id: i64,
        form_id: i64,
    ) -> Result<Option<Assignment>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = fetch_assignment(uow.conn(), user_id, form_id).await;
        uow.finish(result).await
    }

    /// Every form assigned to a user, joined with the assignment's state and
    /// payloads, in form id order.
    ///
    /// An unknown user and a user with no assignments both yield an empty
    /// list; use [`SurveyService::get_user`] to tell them apart.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_assignments_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<AssignmentView>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_views_for_user(uow.conn(), user_id).await;
        uow.finish(result).await
    }

    /// Remove an assignment. Returns `false` if the pair was not assigned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn remove_assignment(&self, user_id: i64, form_id: i64) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute(
                "DELETE FROM assignments WHERE user_id = ?1 AND form_id = ?2",
                [user_id, form_id],
            )
            .await
            .map_err(DatabaseError::from);
        let removed = uow.finish(result).await? > 0;
        tracing::debug!(user_id, form_id, removed, "assignment remove");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_form, seed_user, test_service};
    use serde_json::json;
    use survey_core::enums::FormState;

    #[tokio::test]
    async fn assign_creates_initial_assignment() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;

        let begin = json!({"started_at": "2024-01-01"});
        assert!(svc
            .assign_form_to_user(user.id, form.id, Some(begin.clone()))
            .await
            .unwrap());

        let assignment = svc.get_assignment(user.id, form.id).await.unwrap().unwrap();
        assert_eq!(assignment.state, AssignmentState::Initial);
        assert_eq!(assignment.begin_payload, Some(begin));
        assert_eq!(assignment.response_payload, None);
    }

    #[tokio::test]
    async fn assign_twice_second_is_false() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;

        assert!(svc.assign_form_to_user(user.id, form.id, None).await.unwrap());
        assert!(!svc.assign_form_to_user(user.id, form.id, None).await.unwrap());
        assert_eq!(svc.list_assignments_for_user(user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn assign_missing_parents_is_false() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;

        assert!(!svc.assign_form_to_user(user.id, 999, None).await.unwrap());
        assert!(!svc.assign_form_to_user(999, form.id, None).await.unwrap());
        assert!(svc.get_assignment(user.id, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_state_keeps_response_when_none() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, None).await.unwrap();

        let response = json!({"question_1": "Very satisfied"});
        assert!(svc
            .update_assignment_state(user.id, form.id, "in_progress", Some(response.clone()))
            .await
            .unwrap());
        assert!(svc
            .update_assignment_state(user.id, form.id, "finished", None)
            .await
            .unwrap());

        let assignment = svc.get_assignment(user.id, form.id).await.unwrap().unwrap();
        assert_eq!(assignment.state, AssignmentState::Finished);
        assert_eq!(assignment.response_payload, Some(response));
    }

    #[tokio::test]
    async fn update_state_json_null_leaves_response() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, None).await.unwrap();
        svc.update_assignment_state(user.id, form.id, "finished", Some(json!({"a": 1})))
            .await
            .unwrap();

        assert!(svc
            .update_assignment_state(user.id, form.id, "analyzed", Some(Value::Null))
            .await
            .unwrap());
        let assignment = svc.get_assignment(user.id, form.id).await.unwrap().unwrap();
        assert_eq!(assignment.state, AssignmentState::Analyzed);
        assert_eq!(assignment.response_payload, Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn update_state_invalid_is_false_and_untouched() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, Some(json!({"b": 1})))
            .await
            .unwrap();
        let before = svc.get_assignment(user.id, form.id).await.unwrap();

        assert!(!svc
            .update_assignment_state(user.id, form.id, "bogus", Some(json!({"x": 1})))
            .await
            .unwrap());
        assert_eq!(svc.get_assignment(user.id, form.id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_state_unassigned_pair_is_false() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        assert!(!svc
            .update_assignment_state(user.id, form.id, "finished", None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn states_may_move_backwards() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, None).await.unwrap();

        for state in ["analyzed", "initial", "finished", "in_progress"] {
            assert!(svc
                .update_assignment_state(user.id, form.id, state, None)
                .await
                .unwrap());
            let assignment = svc.get_assignment(user.id, form.id).await.unwrap().unwrap();
            assert_eq!(assignment.state.as_str(), state);
        }
    }

    #[tokio::test]
    async fn list_for_unknown_user_is_empty() {
        let svc = test_service().await;
        assert!(svc.list_assignments_for_user(404).await.unwrap().is_empty());

        let user = seed_user(&svc, "Ann").await;
        assert!(svc.list_assignments_for_user(user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_joins_form_attributes() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let first = seed_form(&svc, "Q1").await;
        let second = seed_form(&svc, "Q2").await;
        svc.assign_form_to_user(user.id, second.id, None).await.unwrap();
        svc.assign_form_to_user(user.id, first.id, None).await.unwrap();

        let views = svc.list_assignments_for_user(user.id).await.unwrap();
        let titles: Vec<_> = views.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["Q1", "Q2"]);
        assert!(views.iter().all(|v| v.form_state == FormState::Draft));
        assert!(views
            .iter()
            .all(|v| v.user_form_state == AssignmentState::Initial));
    }

    #[tokio::test]
    async fn remove_assignment_reports_removal() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, None).await.unwrap();

        assert!(svc.remove_assignment(user.id, form.id).await.unwrap());
        assert!(!svc.remove_assignment(user.id, form.id).await.unwrap());
        assert!(svc.get_assignment(user.id, form.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_form_cascades_assignments() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, None).await.unwrap();

        assert!(svc.delete_form(form.id).await.unwrap());
        assert!(svc.list_assignments_for_user(user.id).await.unwrap().is_empty());
        assert!(svc.get_assignment(user.id, form.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn collision_past_the_probe_is_conflict() {
        let svc = test_service().await;
        let user = seed_user(&svc, "Ann").await;
        let form = seed_form(&svc, "Q1").await;
        svc.assign_form_to_user(user.id, form.id, None).await.unwrap();

        // Skip the probe and go straight at the key, as a racing writer would.
        let uow = svc.db().begin().await.unwrap();
        let result = uow
            .conn()
            .execute(
                "INSERT INTO assignments (user_id, form_id) VALUES (?1, ?2)",
                [user.id, form.id],
            )
            .await
            .map_err(DatabaseError::from);
        let err = uow.finish(result).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));
    }
}
