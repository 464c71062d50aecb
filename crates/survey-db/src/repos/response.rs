//! Response repository — submissions and the values recorded against them.

use chrono::Utc;

use survey_core::entities::{FieldValue, MultipleFieldValue, Response};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, row_exists};
use crate::service::SurveyService;

fn row_to_value(row: &libsql::Row) -> Result<FieldValue, DatabaseError> {
    Ok(FieldValue {
        id: row.get(0)?,
        response_id: row.get(1)?,
        field_id: row.get(2)?,
        value: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

fn row_to_choice(row: &libsql::Row) -> Result<MultipleFieldValue, DatabaseError> {
    Ok(MultipleFieldValue {
        response_id: row.get(0)?,
        field_id: row.get(1)?,
        option_id: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

async fn response_and_field_exist(
    conn: &libsql::Connection,
    response_id: i64,
    field_id: i64,
) -> Result<bool, DatabaseError> {
    Ok(row_exists(
        conn,
        "SELECT 1 FROM form_responses WHERE id = ?1",
        [response_id],
    )
    .await?
        && row_exists(conn, "SELECT 1 FROM form_fields WHERE id = ?1", [field_id]).await?)
}

async fn insert_response(conn: &libsql::Connection) -> Result<Response, DatabaseError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO form_responses (created_at) VALUES (?1)",
        [now.to_rfc3339()],
    )
    .await?;
    Ok(Response {
        id: conn.last_insert_rowid(),
        created_at: now,
    })
}

async fn insert_value(
    conn: &libsql::Connection,
    response_id: i64,
    field_id: i64,
    value: Option<&str>,
) -> Result<Option<FieldValue>, DatabaseError> {
    if !response_and_field_exist(conn, response_id, field_id).await? {
        return Ok(None);
    }

    let now = Utc::now();
    conn.execute(
        "INSERT INTO field_values (response_id, field_id, value, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            response_id,
            field_id,
            value.map_or(libsql::Value::Null, Into::into),
            now.to_rfc3339()
        ],
    )
    .await?;
    Ok(Some(FieldValue {
        id: conn.last_insert_rowid(),
        response_id,
        field_id,
        value: value.map(String::from),
        created_at: now,
    }))
}

async fn insert_choice(
    conn: &libsql::Connection,
    response_id: i64,
    field_id: i64,
    option_id: i64,
) -> Result<bool, DatabaseError> {
    if !response_and_field_exist(conn, response_id, field_id).await? {
        return Ok(false);
    }
    let option_matches = row_exists(
        conn,
        "SELECT 1 FROM field_options WHERE id = ?1 AND field_id = ?2",
        [option_id, field_id],
    )
    .await?;
    if !option_matches {
        return Ok(false);
    }
    let already_chosen = row_exists(
        conn,
        "SELECT 1 FROM multiple_field_values
         WHERE response_id = ?1 AND field_id = ?2 AND option_id = ?3",
        [response_id, field_id, option_id],
    )
    .await?;
    if already_chosen {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO multiple_field_values (response_id, field_id, option_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![response_id, field_id, option_id, Utc::now().to_rfc3339()],
    )
    .await?;
    Ok(true)
}

async fn select_values(
    conn: &libsql::Connection,
    response_id: i64,
) -> Result<Vec<FieldValue>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, response_id, field_id, value, created_at
             FROM field_values WHERE response_id = ?1 ORDER BY id",
            [response_id],
        )
        .await?;
    let mut values = Vec::new();
    while let Some(row) = rows.next().await? {
        values.push(row_to_value(&row)?);
    }
    Ok(values)
}

async fn select_choices(
    conn: &libsql::Connection,
    response_id: i64,
) -> Result<Vec<MultipleFieldValue>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT response_id, field_id, option_id, created_at
             FROM multiple_field_values WHERE response_id = ?1 ORDER BY field_id, option_id",
            [response_id],
        )
        .await?;
    let mut choices = Vec::new();
    while let Some(row) = rows.next().await? {
        choices.push(row_to_choice(&row)?);
    }
    Ok(choices)
}

impl SurveyService {
    /// Open a new, empty response.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store rejects the write.
    pub async fn create_response(&self) -> Result<Response, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_response(uow.conn()).await;
        uow.finish(result).await
    }

    /// Record a single-valued answer. `None` if the response or field is missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn record_field_value(
        &self,
        response_id: i64,
        field_id: i64,
        value: Option<&str>,
    ) -> Result<Option<FieldValue>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_value(uow.conn(), response_id, field_id, value).await;
        uow.finish(result).await
    }

    /// Record one chosen option of a multi-select field.
    ///
    /// Returns `false` if the response or field is missing, the option belongs
    /// to a different field, or the choice is already recorded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn record_multiple_choice(
        &self,
        response_id: i64,
        field_id: i64,
        option_id: i64,
    ) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_choice(uow.conn(), response_id, field_id, option_id).await;
        uow.finish(result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_field_values(
        &self,
        response_id: i64,
    ) -> Result<Vec<FieldValue>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_values(uow.conn(), response_id).await;
        uow.finish(result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_multiple_choices(
        &self,
        response_id: i64,
    ) -> Result<Vec<MultipleFieldValue>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_choices(uow.conn(), response_id).await;
        uow.finish(result).await
    }

    /// Delete a response and everything recorded against it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn delete_response(&self, id: i64) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute("DELETE FROM form_responses WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from);
        Ok(uow.finish(result).await? > 0)
    }
}
