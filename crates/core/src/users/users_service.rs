use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User, UserCredentials};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;

/// Service for managing users.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    /// Registers a new user with the default starting balance.
    ///
    /// A duplicate email surfaces as a unique-constraint database error,
    /// which the API layer maps to a conflict response.
    async fn register_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        debug!("Registering user {}", new_user.email);
        self.repository.create(new_user).await
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }

    fn get_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        self.repository.get_credentials(email)
    }
}
