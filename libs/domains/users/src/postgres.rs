use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, Statement};
use std::str::FromStr;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserStatus};
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: sea_orm::DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Helper struct for deserializing user rows from the database
#[derive(Debug, FromQueryResult)]
struct UserRow {
    user_id: i64,
    user_name: String,
    first_name: String,
    last_name: String,
    email: String,
    user_status: String,
    department: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserRow {
    fn into_user(self) -> UserResult<User> {
        // The CHECK constraint keeps user_status within the closed enum; a
        // parse failure here means the table was tampered with out of band.
        let status = UserStatus::from_str(&self.user_status).map_err(|_| {
            UserError::Internal(format!(
                "Unexpected user_status '{}' on row {}",
                self.user_status, self.user_id
            ))
        })?;

        Ok(User {
            id: self.user_id,
            user_name: self.user_name,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            status,
            department: self.department,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Translate a write-time `DbErr` into the domain taxonomy.
///
/// A unique-index violation is the lost half of the check-then-act race and
/// must surface exactly like a pre-check conflict. The violated index name
/// identifies the field; a duplicate-key error without a recognizable index
/// name is attributed to userName, the first-checked field.
fn map_write_error(e: sea_orm::DbErr, user: &User) -> UserError {
    let msg = e.to_string();
    if msg.contains("uq_users_user_name") {
        return UserError::UserNameTaken(user.user_name.clone());
    }
    if msg.contains("uq_users_email") {
        return UserError::EmailTaken(user.email.clone());
    }
    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        return UserError::UserNameTaken(user.user_name.clone());
    }
    UserError::Internal(format!("Database error: {}", e))
}

fn internal(e: sea_orm::DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let sql = "SELECT * FROM users ORDER BY user_id ASC";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, []);

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(internal)?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let sql = "SELECT * FROM users WHERE user_id = $1";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(internal)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn insert(&self, user: User) -> UserResult<User> {
        let sql = r#"
            INSERT INTO users (user_name, first_name, last_name, email, user_status, department, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.user_name.clone().into(),
                user.first_name.clone().into(),
                user.last_name.clone().into(),
                user.email.clone().into(),
                user.status.to_string().into(),
                user.department.clone().into(),
                user.created_at.into(),
                user.updated_at.into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| map_write_error(e, &user))?
            .ok_or_else(|| UserError::Internal("Failed to create user".to_string()))?;

        let created = row.into_user()?;
        tracing::info!(user_id = created.id, user_name = %created.user_name, "Created user");
        Ok(created)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let sql = r#"
            UPDATE users
            SET user_name = $2, first_name = $3, last_name = $4, email = $5,
                user_status = $6, department = $7, updated_at = $8
            WHERE user_id = $1
            RETURNING *
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.id.into(),
                user.user_name.clone().into(),
                user.first_name.clone().into(),
                user.last_name.clone().into(),
                user.email.clone().into(),
                user.status.to_string().into(),
                user.department.clone().into(),
                user.updated_at.into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| map_write_error(e, &user))?;

        let updated = row.ok_or(UserError::NotFound(user.id))?.into_user()?;
        tracing::info!(user_id = updated.id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let sql = "DELETE FROM users WHERE user_id = $1";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let result = self.db.execute_raw(stmt).await.map_err(internal)?;

        if result.rows_affected() > 0 {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_user_name(&self, user_name: &str) -> UserResult<bool> {
        let sql = "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1) as exists";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [user_name.into()]);

        #[derive(FromQueryResult)]
        struct ExistsResult {
            exists: bool,
        }

        let result = ExistsResult::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(result.map(|r| r.exists).unwrap_or(false))
    }

    async fn exists_by_email(&self, email: &str, exclude_id: i64) -> UserResult<bool> {
        // On update the subject's own row is excluded so a user keeps their
        // email without tripping the check.
        let (sql, values): (&str, Vec<sea_orm::Value>) = if exclude_id != 0 {
            (
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND user_id <> $2) as exists",
                vec![email.into(), exclude_id.into()],
            )
        } else {
            (
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) as exists",
                vec![email.into()],
            )
        };

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, values);

        #[derive(FromQueryResult)]
        struct ExistsResult {
            exists: bool,
        }

        let result = ExistsResult::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(result.map(|r| r.exists).unwrap_or(false))
    }

    async fn ping(&self) -> UserResult<()> {
        database::postgres::check_health(&self.db)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))
    }
}
