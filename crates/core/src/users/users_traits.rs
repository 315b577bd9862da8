use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserCredentials};

/// Trait for user repository operations.
///
/// Balance and aggregate mutations are deliberately absent: they only happen
/// inside the trade execution transaction.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Retrieves a user by ID.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Looks up a user with their password hash for login verification.
    fn get_credentials(&self, email: &str) -> Result<Option<UserCredentials>>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register_user(&self, new_user: NewUser) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_credentials(&self, email: &str) -> Result<Option<UserCredentials>>;
}
