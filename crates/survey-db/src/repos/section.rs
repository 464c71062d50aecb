//! Section repository — CRUD for form sections.

use chrono::Utc;

use survey_core::entities::Section;
use survey_core::page::PageRequest;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::SurveyService;
use crate::updates::section::SectionUpdate;

const SELECT_COLS: &str = "id, title, order_index, created_at";

fn row_to_section(row: &libsql::Row) -> Result<Section, DatabaseError> {
    Ok(Section {
        id: row.get(0)?,
        title: row.get(1)?,
        order_index: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

async fn fetch_section(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Section>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM form_sections WHERE id = ?1"),
            [id],
        )
        .await?;
    rows.next().await?.map(|row| row_to_section(&row)).transpose()
}

async fn insert_section(
    conn: &libsql::Connection,
    title: &str,
    order_index: i64,
) -> Result<Section, DatabaseError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO form_sections (title, order_index, created_at) VALUES (?1, ?2, ?3)",
        libsql::params![title, order_index, now.to_rfc3339()],
    )
    .await?;
    Ok(Section {
        id: conn.last_insert_rowid(),
        title: title.to_string(),
        order_index,
        created_at: now,
    })
}

async fn select_sections(
    conn: &libsql::Connection,
    page: PageRequest,
) -> Result<Vec<Section>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM form_sections ORDER BY id LIMIT ?1 OFFSET ?2"),
            libsql::params![i64::from(page.limit()), i64::from(page.skip())],
        )
        .await?;

    let mut sections = Vec::new();
    while let Some(row) = rows.next().await? {
        sections.push(row_to_section(&row)?);
    }
    Ok(sections)
}

async fn apply_section_update(
    conn: &libsql::Connection,
    id: i64,
    update: &SectionUpdate,
) -> Result<Option<Section>, DatabaseError> {
    if fetch_section(conn, id).await?.is_none() {
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
    if let Some(order_index) = update.order_index {
        sets.push(format!("order_index = ?{idx}"));
        params.push(order_index.into());
        idx += 1;
    }

    if !sets.is_empty() {
        params.push(id.into());
        let sql = format!(
            "UPDATE form_sections SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        conn.execute(&sql, libsql::params_from_iter(params)).await?;
    }

    fetch_section(conn, id).await
}

impl SurveyService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store rejects the write.
    pub async fn create_section(
        &self,
        title: &str,
        order_index: i64,
    ) -> Result<Section, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_section(uow.conn(), title, order_index).await;
        uow.finish(result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn get_section(&self, id: i64) -> Result<Option<Section>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = fetch_section(uow.conn(), id).await;
        uow.finish(result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_sections(&self, page: PageRequest) -> Result<Vec<Section>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_sections(uow.conn(), page).await;
        uow.finish(result).await
    }

    /// Apply the supplied fields of `update`. `None` if no such section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn update_section(
        &self,
        id: i64,
        update: SectionUpdate,
    ) -> Result<Option<Section>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = apply_section_update(uow.conn(), id, &update).await;
        uow.finish(result).await
    }

    /// Delete a section together with its fields, their options and values.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn delete_section(&self, id: i64) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute("DELETE FROM form_sections WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from);
        Ok(uow.finish(result).await? > 0)
    }
}
