//! Field repository — field types, fields, and their options.

use chrono::Utc;
use serde_json::Value;

use survey_core::entities::{Field, FieldOption, FieldType, NewField};
use survey_core::page::PageRequest;

use crate::error::DatabaseError;
use crate::helpers::{
    get_bool, get_opt_string, json_column, parse_datetime, parse_optional_json, row_exists,
};
use crate::service::SurveyService;
use crate::updates::field::FieldUpdate;

const FIELD_COLS: &str =
    "id, section_id, field_type_id, name, label, required, order_index, config, created_at";
const OPTION_COLS: &str = "id, field_id, value, label, order_index, created_at";
const TYPE_COLS: &str = "id, type_name, config_schema, created_at";

fn row_to_field_type(row: &libsql::Row) -> Result<FieldType, DatabaseError> {
    Ok(FieldType {
        id: row.get(0)?,
        type_name: row.get(1)?,
        config_schema: parse_optional_json(get_opt_string(row, 2)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

/// Options are filled in separately by [`attach_options`].
fn row_to_field(row: &libsql::Row) -> Result<Field, DatabaseError> {
    Ok(Field {
        id: row.get(0)?,
        section_id: row.get(1)?,
        field_type_id: row.get(2)?,
        name: row.get(3)?,
        label: row.get(4)?,
        required: get_bool(row, 5)?,
        order_index: row.get(6)?,
        config: parse_optional_json(get_opt_string(row, 7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        options: Vec::new(),
    })
}

fn row_to_option(row: &libsql::Row) -> Result<FieldOption, DatabaseError> {
    Ok(FieldOption {
        id: row.get(0)?,
        field_id: row.get(1)?,
        value: row.get(2)?,
        label: row.get(3)?,
        order_index: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

async fn select_options(
    conn: &libsql::Connection,
    field_id: i64,
) -> Result<Vec<FieldOption>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!(
                "SELECT {OPTION_COLS} FROM field_options WHERE field_id = ?1 ORDER BY order_index, id"
            ),
            [field_id],
        )
        .await?;

    let mut options = Vec::new();
    while let Some(row) = rows.next().await? {
        options.push(row_to_option(&row)?);
    }
    Ok(options)
}

async fn attach_options(
    conn: &libsql::Connection,
    mut fields: Vec<Field>,
) -> Result<Vec<Field>, DatabaseError> {
    for field in &mut fields {
        field.options = select_options(conn, field.id).await?;
    }
    Ok(fields)
}

async fn query_fields(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<Vec<Field>, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let mut fields = Vec::new();
    while let Some(row) = rows.next().await? {
        fields.push(row_to_field(&row)?);
    }
    attach_options(conn, fields).await
}

async fn fetch_field(conn: &libsql::Connection, id: i64) -> Result<Option<Field>, DatabaseError> {
    let fields = query_fields(
        conn,
        &format!("SELECT {FIELD_COLS} FROM form_fields WHERE id = ?1"),
        [id],
    )
    .await?;
    Ok(fields.into_iter().next())
}

async fn insert_field_type(
    conn: &libsql::Connection,
    type_name: &str,
    config_schema: Option<&Value>,
) -> Result<FieldType, DatabaseError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO field_types (type_name, config_schema, created_at) VALUES (?1, ?2, ?3)",
        libsql::params![type_name, json_column(config_schema)?, now.to_rfc3339()],
    )
    .await?;
    Ok(FieldType {
        id: conn.last_insert_rowid(),
        type_name: type_name.to_string(),
        config_schema: config_schema.filter(|v| !v.is_null()).cloned(),
        created_at: now,
    })
}

async fn select_field_types(
    conn: &libsql::Connection,
    page: PageRequest,
) -> Result<Vec<FieldType>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {TYPE_COLS} FROM field_types ORDER BY id LIMIT ?1 OFFSET ?2"),
            libsql::params![i64::from(page.limit()), i64::from(page.skip())],
        )
        .await?;

    let mut types = Vec::new();
    while let Some(row) = rows.next().await? {
        types.push(row_to_field_type(&row)?);
    }
    Ok(types)
}

async fn insert_field(
    conn: &libsql::Connection,
    new: &NewField,
) -> Result<Option<Field>, DatabaseError> {
    let section_exists = row_exists(
        conn,
        "SELECT 1 FROM form_sections WHERE id = ?1",
        [new.section_id],
    )
    .await?;
    let type_exists = row_exists(
        conn,
        "SELECT 1 FROM field_types WHERE id = ?1",
        [new.field_type_id],
    )
    .await?;
    if !section_exists || !type_exists {
        return Ok(None);
    }

    let now = Utc::now();
    conn.execute(
        &format!(
            "INSERT INTO form_fields ({FIELD_COLS}) VALUES (NULL, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
        ),
        libsql::params![
            new.section_id,
            new.field_type_id,
            new.name.as_str(),
            new.label.as_str(),
            i64::from(new.required),
            new.order_index,
            json_column(new.config.as_ref())?,
            now.to_rfc3339()
        ],
    )
    .await?;

    Ok(Some(Field {
        id: conn.last_insert_rowid(),
        section_id: new.section_id,
        field_type_id: new.field_type_id,
        name: new.name.clone(),
        label: new.label.clone(),
        required: new.required,
        order_index: new.order_index,
        config: new.config.clone().filter(|v| !v.is_null()),
        created_at: now,
        options: Vec::new(),
    }))
}

async fn apply_field_update(
    conn: &libsql::Connection,
    id: i64,
    update: &FieldUpdate,
) -> Result<Option<Field>, DatabaseError> {
    if !row_exists(conn, "SELECT 1 FROM form_fields WHERE id = ?1", [id]).await? {
        return Ok(None);
    }

    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    let mut idx = 1usize;

    if let Some(ref name) = update.name {
        sets.push(format!("name = ?{idx}"));
        params.push(name.clone().into());
        idx += 1;
    }
    if let Some(ref label) = update.label {
        sets.push(format!("label = ?{idx}"));
        params.push(label.clone().into());
        idx += 1;
    }
    if let Some(required) = update.required {
        sets.push(format!("required = ?{idx}"));
        params.push(i64::from(required).into());
        idx += 1;
    }
    if let Some(order_index) = update.order_index {
        sets.push(format!("order_index = ?{idx}"));
        params.push(order_index.into());
        idx += 1;
    }
    if let Some(ref config) = update.config {
        sets.push(format!("config = ?{idx}"));
        params.push(json_column(config.as_ref())?.map_or(libsql::Value::Null, Into::into));
        idx += 1;
    }

    if !sets.is_empty() {
        params.push(id.into());
        let sql = format!(
            "UPDATE form_fields SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        conn.execute(&sql, libsql::params_from_iter(params)).await?;
    }

    fetch_field(conn, id).await
}

async fn insert_option(
    conn: &libsql::Connection,
    field_id: i64,
    value: &str,
    label: &str,
    order_index: i64,
) -> Result<Option<FieldOption>, DatabaseError> {
    if !row_exists(conn, "SELECT 1 FROM form_fields WHERE id = ?1", [field_id]).await? {
        return Ok(None);
    }

    let now = Utc::now();
    conn.execute(
        "INSERT INTO field_options (field_id, value, label, order_index, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![field_id, value, label, order_index, now.to_rfc3339()],
    )
    .await?;
    Ok(Some(FieldOption {
        id: conn.last_insert_rowid(),
        field_id,
        value: value.to_string(),
        label: label.to_string(),
        order_index,
        created_at: now,
    }))
}

impl SurveyService {
    /// Register a field type.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` if `type_name` is already registered.
    pub async fn create_field_type(
        &self,
        type_name: &str,
        config_schema: Option<&Value>,
    ) -> Result<FieldType, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_field_type(uow.conn(), type_name, config_schema).await;
        uow.finish(result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_field_types(
        &self,
        page: PageRequest,
    ) -> Result<Vec<FieldType>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_field_types(uow.conn(), page).await;
        uow.finish(result).await
    }

    /// Create a field. `None` if its section or field type does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn create_field(&self, new: &NewField) -> Result<Option<Field>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_field(uow.conn(), new).await;
        uow.finish(result).await
    }

    /// Fetch a field with its options. `None` if no such field.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn get_field(&self, id: i64) -> Result<Option<Field>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = fetch_field(uow.conn(), id).await;
        uow.finish(result).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_fields(&self, page: PageRequest) -> Result<Vec<Field>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = query_fields(
            uow.conn(),
            &format!("SELECT {FIELD_COLS} FROM form_fields ORDER BY id LIMIT ?1 OFFSET ?2"),
            libsql::params![i64::from(page.limit()), i64::from(page.skip())],
        )
        .await;
        uow.finish(result).await
    }

    /// Fields of one section in display order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_fields_for_section(
        &self,
        section_id: i64,
    ) -> Result<Vec<Field>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = query_fields(
            uow.conn(),
            &format!(
                "SELECT {FIELD_COLS} FROM form_fields WHERE section_id = ?1 ORDER BY order_index, id"
            ),
            [section_id],
        )
        .await;
        uow.finish(result).await
    }

    /// Apply the supplied fields of `update`. `None` if no such field.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn update_field(
        &self,
        id: i64,
        update: FieldUpdate,
    ) -> Result<Option<Field>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = apply_field_update(uow.conn(), id, &update).await;
        uow.finish(result).await
    }

    /// Delete a field together with its options and recorded values.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn delete_field(&self, id: i64) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute("DELETE FROM form_fields WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from);
        Ok(uow.finish(result).await? > 0)
    }

    /// Add a selectable option to a field. `None` if no such field.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn add_field_option(
        &self,
        field_id: i64,
        value: &str,
        label: &str,
        order_index: i64,
    ) -> Result<Option<FieldOption>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_option(uow.conn(), field_id, value, label, order_index).await;
        uow.finish(result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::field::FieldUpdateBuilder;
    use serde_json::json;

    async fn seed_field(svc: &SurveyService) -> Field {
        let section = svc.create_section("Employment", 0).await.unwrap();
        let select = svc.create_field_type("select", None).await.unwrap();
        svc.create_field(&NewField {
            section_id: section.id,
            field_type_id: select.id,
            name: "employment_status".into(),
            label: "Employment status".into(),
            required: true,
            order_index: 0,
            config: Some(json!({"multiple": false})),
        })
        .await
        .unwrap()
        .unwrap()
    }

    #[tokio::test]
    async fn field_type_name_is_unique() {
        let svc = test_service().await;
        let schema = json!({"type": "object"});
        let text = svc.create_field_type("text", Some(&schema)).await.unwrap();
        assert_eq!(text.config_schema, Some(schema));

        let err = svc.create_field_type("text", None).await.unwrap_err();
        assert!(err.is_conflict(), "expected conflict, got {err}");

        let types = svc.list_field_types(PageRequest::default()).await.unwrap();
        assert_eq!(types.len(), 1);
    }

    #[tokio::test]
    async fn create_field_requires_parents() {
        let svc = test_service().await;
        let select = svc.create_field_type("select", None).await.unwrap();
        let orphan = svc
            .create_field(&NewField {
                section_id: 99,
                field_type_id: select.id,
                name: "x".into(),
                label: "X".into(),
                required: false,
                order_index: 0,
                config: None,
            })
            .await
            .unwrap();
        assert!(orphan.is_none());
    }

    #[tokio::test]
    async fn field_roundtrip_with_options() {
        let svc = test_service().await;
        let field = seed_field(&svc).await;

        svc.add_field_option(field.id, "unemployed", "Unemployed", 1)
            .await
            .unwrap()
            .unwrap();
        svc.add_field_option(field.id, "employed", "Employed", 0)
            .await
            .unwrap()
            .unwrap();
        assert!(svc.add_field_option(999, "x", "X", 0).await.unwrap().is_none());

        let fetched = svc.get_field(field.id).await.unwrap().unwrap();
        assert!(fetched.required);
        assert_eq!(fetched.config, Some(json!({"multiple": false})));
        let values: Vec<_> = fetched.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["employed", "unemployed"]);
    }

    #[tokio::test]
    async fn update_field_partial_and_clear_config() {
        let svc = test_service().await;
        let field = seed_field(&svc).await;

        let update = FieldUpdateBuilder::new()
            .label("Current employment")
            .required(false)
            .config(None)
            .build();
        let updated = svc.update_field(field.id, update).await.unwrap().unwrap();
        assert_eq!(updated.label, "Current employment");
        assert_eq!(updated.name, "employment_status");
        assert!(!updated.required);
        assert_eq!(updated.config, None);
    }

    #[tokio::test]
    async fn deleting_section_cascades_fields_and_options() {
        let svc = test_service().await;
        let field = seed_field(&svc).await;
        let option = svc
            .add_field_option(field.id, "employed", "Employed", 0)
            .await
            .unwrap()
            .unwrap();

        assert!(svc.delete_section(field.section_id).await.unwrap());
        assert!(svc.get_field(field.id).await.unwrap().is_none());

        let mut rows = svc
            .db()
            .conn()
            .query("SELECT 1 FROM field_options WHERE id = ?1", [option.id])
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_fields_for_section_in_order() {
        let svc = test_service().await;
        let field = seed_field(&svc).await;
        svc.create_field(&NewField {
            section_id: field.section_id,
            field_type_id: field.field_type_id,
            name: "first".into(),
            label: "First".into(),
            required: false,
            order_index: -1,
            config: None,
        })
        .await
        .unwrap()
        .unwrap();

        let fields = svc.list_fields_for_section(field.section_id).await.unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["first", "employment_status"]);
        assert_eq!(svc.list_fields(PageRequest::default()).await.unwrap().len(), 2);
        assert!(svc.delete_field(field.id).await.unwrap());
        assert!(!svc.delete_field(field.id).await.unwrap());
    }
}
