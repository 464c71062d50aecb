//! Form repository — CRUD with partial updates and lenient state changes.

use serde_json::Value;

use survey_core::entities::Form;
use survey_core::enums::FormState;
use survey_core::page::PageRequest;

use crate::error::DatabaseError;
use crate::helpers::{count_rows, parse_enum, parse_json};
use crate::service::SurveyService;
use crate::updates::form::FormUpdate;

const SELECT_COLS: &str = "id, title, description, structure, category, state";

fn row_to_form(row: &libsql::Row) -> Result<Form, DatabaseError> {
    Ok(Form {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        structure: parse_json(&row.get::<String>(3)?)?,
        category: row.get(4)?,
        state: parse_enum(&row.get::<String>(5)?)?,
    })
}

pub(crate) async fn fetch_form(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Form>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM forms WHERE id = ?1"),
            [id],
        )
        .await?;
    rows.next().await?.map(|row| row_to_form(&row)).transpose()
}

async fn insert_form(
    conn: &libsql::Connection,
    title: &str,
    description: &str,
    structure: &Value,
    category: &str,
) -> Result<Form, DatabaseError> {
    let state = FormState::Draft;
    conn.execute(
        "INSERT INTO forms (title, description, structure, category, state)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            title,
            description,
            serde_json::to_string(structure)?,
            category,
            state.as_str()
        ],
    )
    .await?;

    Ok(Form {
        id: conn.last_insert_rowid(),
        title: title.to_string(),
        description: description.to_string(),
        structure: structure.clone(),
        category: category.to_string(),
        state,
    })
}

async fn select_forms(
    conn: &libsql::Connection,
    page: PageRequest,
) -> Result<Vec<Form>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM forms ORDER BY id LIMIT ?1 OFFSET ?2"),
            libsql::params![i64::from(page.limit()), i64::from(page.skip())],
        )
        .await?;

    let mut forms = Vec::new();
    while let Some(row) = rows.next().await? {
        forms.push(row_to_form(&row)?);
    }
    Ok(forms)
}

async fn apply_form_update(
    conn: &libsql::Connection,
    id: i64,
    update: &FormUpdate,
) -> Result<Option<Form>, DatabaseError> {
    if fetch_form(conn, id).await?.is_none() {
        return Ok(None);
    }

    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    let mut idx = 1usize;

    if let Some(ref title) = update.title {
        sets.push(format!("title = ?{idx}"));
        params.push(title.clone().into());
        idx += 1;
    }
    if let Some(ref description) = update.description {
        sets.push(format!("description = ?{idx}"));
        params.push(description.clone().into());
        idx += 1;
    }
    if let Some(ref structure) = update.structure {
        sets.push(format!("structure = ?{idx}"));
        params.push(serde_json::to_string(structure)?.into());
        idx += 1;
    }
    if let Some(ref category) = update.category {
        sets.push(format!("category = ?{idx}"));
        params.push(category.clone().into());
        idx += 1;
    }
    if let Some(ref raw) = update.state {
        match raw.parse::<FormState>() {
            Ok(state) => {
                sets.push(format!("state = ?{idx}"));
                params.push(state.as_str().into());
                idx += 1;
            }
            // Unknown states are dropped; the rest of the patch still applies.
            Err(error) => tracing::debug!(form_id = id, %error, "ignoring form state"),
        }
    }

    if !sets.is_empty() {
        params.push(id.into());
        let sql = format!("UPDATE forms SET {} WHERE id = ?{idx}", sets.join(", "));
        conn.execute(&sql, libsql::params_from_iter(params)).await?;
    }

    fetch_form(conn, id).await
}

impl SurveyService {
    /// Create a form. The state always starts at `draft`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store rejects the write.
    pub async fn create_form(
        &self,
        title: &str,
        description: &str,
        structure: &Value,
        category: &str,
    ) -> Result<Form, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_form(uow.conn(), title, description, structure, category).await;
        let form = uow.finish(result).await?;
        tracing::debug!(form_id = form.id, "form created");
        Ok(form)
    }

    /// Fetch a form by id. `None` if no such form.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn get_form(&self, id: i64) -> Result<Option<Form>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = fetch_form(uow.conn(), id).await;
        uow.finish(result).await
    }

    /// One page of forms in id order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_forms(&self, page: PageRequest) -> Result<Vec<Form>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_forms(uow.conn(), page).await;
        uow.finish(result).await
    }

    /// Total number of forms.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn count_forms(&self) -> Result<u64, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = count_rows(uow.conn(), "SELECT COUNT(*) FROM forms").await;
        uow.finish(result).await
    }

    /// Apply the supplied fields of `update`. `None` if no such form.
    ///
    /// A `state` outside `draft | started | finished` is ignored rather than
    /// rejected, so the remaining fields are still written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn update_form(
        &self,
        id: i64,
        update: FormUpdate,
    ) -> Result<Option<Form>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = apply_form_update(uow.conn(), id, &update).await;
        uow.finish(result).await
    }

    /// Delete a form and, by cascade, its assignments.
    ///
    /// Returns `false` if no such form.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn delete_form(&self, id: i64) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute("DELETE FROM forms WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from);
        let removed = uow.finish(result).await? > 0;
        tracing::debug!(form_id = id, removed, "form delete");
        Ok(removed)
    }
}
