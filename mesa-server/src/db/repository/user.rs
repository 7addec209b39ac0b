//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::User;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "app_user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        self.base.get(TABLE, id).await
    }

    /// Find user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM app_user WHERE email = $email LIMIT 1")
            .bind(("email", email.trim().to_lowercase()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a user; email must be unused
    ///
    /// The caller hashes the password; the email is stored lowercased.
    pub async fn create(&self, mut user: User) -> RepoResult<User> {
        user.email = user.email.trim().to_lowercase();

        if self.find_by_email(&user.email).await?.is_some() {
            return Err(RepoError::Duplicate("Email already registered".to_string()));
        }

        let id = user.user_id.clone();
        self.base.insert(TABLE, &id, user).await
    }
}
