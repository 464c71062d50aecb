//! User repository — CRUD with partial updates.

use survey_core::entities::User;
use survey_core::page::PageRequest;

use crate::error::DatabaseError;
use crate::helpers::count_rows;
use crate::service::SurveyService;
use crate::updates::user::UserUpdate;

const SELECT_COLS: &str = "id, name, category";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
    })
}

pub(crate) async fn fetch_user(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<User>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
            [id],
        )
        .await?;
    rows.next().await?.map(|row| row_to_user(&row)).transpose()
}

async fn insert_user(
    conn: &libsql::Connection,
    name: &str,
    category: &str,
) -> Result<User, DatabaseError> {
    conn.execute(
        "INSERT INTO users (name, category) VALUES (?1, ?2)",
        libsql::params![name, category],
    )
    .await?;
    Ok(User {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        category: category.to_string(),
    })
}

async fn select_users(
    conn: &libsql::Connection,
    page: PageRequest,
) -> Result<Vec<User>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM users ORDER BY id LIMIT ?1 OFFSET ?2"),
            libsql::params![i64::from(page.limit()), i64::from(page.skip())],
        )
        .await?;

    let mut users = Vec::new();
    while let Some(row) = rows.next().await? {
        users.push(row_to_user(&row)?);
    }
    Ok(users)
}

async fn apply_user_update(
    conn: &libsql::Connection,
    id: i64,
    update: &UserUpdate,
) -> Result<Option<User>, DatabaseError> {
    if fetch_user(conn, id).await?.is_none() {
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
    if let Some(ref category) = update.category {
        sets.push(format!("category = ?{idx}"));
        params.push(category.clone().into());
        idx += 1;
    }

    if !sets.is_empty() {
        params.push(id.into());
        let sql = format!("UPDATE users SET {} WHERE id = ?{idx}", sets.join(", "));
        conn.execute(&sql, libsql::params_from_iter(params)).await?;
    }

    fetch_user(conn, id).await
}

impl SurveyService {
    /// Create a user and return it with its newly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store rejects the write.
    pub async fn create_user(&self, name: &str, category: &str) -> Result<User, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = insert_user(uow.conn(), name, category).await;
        let user = uow.finish(result).await?;
        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Fetch a user by id. `None` if no such user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = fetch_user(uow.conn(), id).await;
        uow.finish(result).await
    }

    /// One page of users in id order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn list_users(&self, page: PageRequest) -> Result<Vec<User>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = select_users(uow.conn(), page).await;
        uow.finish(result).await
    }

    /// Total number of users.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn count_users(&self) -> Result<u64, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = count_rows(uow.conn(), "SELECT COUNT(*) FROM users").await;
        uow.finish(result).await
    }

    /// Apply the supplied fields of `update`. `None` if no such user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn update_user(
        &self,
        id: i64,
        update: UserUpdate,
    ) -> Result<Option<User>, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = apply_user_update(uow.conn(), id, &update).await;
        uow.finish(result).await
    }

    /// Delete a user and, by cascade, its assignments.
    ///
    /// Returns `false` if no such user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failure.
    pub async fn delete_user(&self, id: i64) -> Result<bool, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = uow
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from);
        let removed = uow.finish(result).await? > 0;
        tracing::debug!(user_id = id, removed, "user delete");
        Ok(removed)
    }
}
