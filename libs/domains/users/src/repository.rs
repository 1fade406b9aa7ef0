use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users ordered by ascending id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by id
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Insert a new user, assigning its id; the stored row is returned.
    ///
    /// A userName/email collision at write time surfaces as the same conflict
    /// error the service-level pre-check produces.
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Replace the full row matching `user.id`
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by id; returns whether a row was removed
    async fn delete(&self, id: i64) -> UserResult<bool>;

    /// Check whether any user holds this username
    async fn exists_by_user_name(&self, user_name: &str) -> UserResult<bool>;

    /// Check whether any user other than `exclude_id` holds this email.
    /// Pass `0` to check against every user.
    async fn exists_by_email(&self, email: &str, exclude_id: i64) -> UserResult<bool>;

    /// Store reachability probe
    async fn ping(&self) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// In-memory implementation of UserRepository (for development/testing).
///
/// Enforces the same uniqueness rules a database unique index would, so the
/// lost-race path through the service behaves identically on both backends.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;

        let mut users: Vec<User> = store.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn insert(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        // Uniqueness backstop: userName is checked before email so both
        // backends report the same field when a payload collides on both.
        if store.users.values().any(|u| u.user_name == user.user_name) {
            return Err(UserError::UserNameTaken(user.user_name));
        }
        if store.users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken(user.email));
        }

        store.next_id += 1;
        user.id = store.next_id;
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, user_name = %user.user_name, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }

        if store
            .users
            .values()
            .any(|u| u.id != user.id && u.user_name == user.user_name)
        {
            return Err(UserError::UserNameTaken(user.user_name));
        }
        if store
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailTaken(user.email));
        }

        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_user_name(&self, user_name: &str) -> UserResult<bool> {
        let store = self.store.read().await;
        Ok(store.users.values().any(|u| u.user_name == user_name))
    }

    async fn exists_by_email(&self, email: &str, exclude_id: i64) -> UserResult<bool> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .any(|u| u.email == email && u.id != exclude_id))
    }

    async fn ping(&self) -> UserResult<()> {
        Ok(())
    }
}
