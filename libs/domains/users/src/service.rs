use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserStatus};
use crate::repository::UserRepository;

/// Service layer for User business logic.
///
/// This is the only component that sequences validation, the uniqueness
/// guard, and repository calls. It is stateless and cheap to clone.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users ordered by ascending id
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by id
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user.
    ///
    /// Sequence: validate shape, then the uniqueness guard (userName before
    /// email), then the status checkpoint, then persist with fresh
    /// timestamps. The guard is a pre-check only; the store's unique indexes
    /// remain the authority and a write-time collision surfaces as the same
    /// conflict error.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        if self.repository.exists_by_user_name(&input.user_name).await? {
            tracing::warn!(user_name = %input.user_name, "Username conflict during creation");
            return Err(UserError::UserNameTaken(input.user_name));
        }
        if self.repository.exists_by_email(&input.email, 0).await? {
            tracing::warn!(email = %input.email, "Email conflict during creation");
            return Err(UserError::EmailTaken(input.email));
        }

        let status = self.parse_status(&input.status)?;

        let user = User::from_create(input, status);
        let created = self.repository.insert(user).await?;

        tracing::info!(
            user_id = created.id,
            user_name = %created.user_name,
            "User created"
        );
        Ok(created)
    }

    /// Replace an existing user (full-replacement semantics).
    ///
    /// Uniqueness is re-checked only for fields that actually changed; the
    /// email check excludes the subject's own row so a user keeps their
    /// address without a false conflict.
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        input.validate()?;

        if input.user_name != user.user_name {
            if self.repository.exists_by_user_name(&input.user_name).await? {
                tracing::warn!(user_id = id, user_name = %input.user_name, "Username conflict during update");
                return Err(UserError::UserNameTaken(input.user_name));
            }
        }
        if input.email != user.email {
            if self.repository.exists_by_email(&input.email, id).await? {
                tracing::warn!(user_id = id, email = %input.email, "Email conflict during update");
                return Err(UserError::EmailTaken(input.email));
            }
        }

        let status = self.parse_status(&input.status)?;

        user.apply_update(input, status);
        let updated = self.repository.update(user).await?;

        tracing::info!(user_id = updated.id, "User updated");
        Ok(updated)
    }

    /// Delete a user by id.
    ///
    /// Deleting a missing id reports NotFound, matching Get and Update.
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Store reachability probe for the readiness endpoint
    pub async fn ping(&self) -> UserResult<()> {
        self.repository.ping().await
    }

    /// Service-level status checkpoint, independent of field validation.
    /// An unknown code is rejected before any write; it is never coerced.
    fn parse_status(&self, code: &str) -> UserResult<UserStatus> {
        code.parse()
            .map_err(|_| UserError::InvalidStatus(code.to_string()))
    }
}
