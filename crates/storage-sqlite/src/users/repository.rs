use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users::dsl::*;

use super::model::UserDB;
use tradesim_core::errors::Result;
use tradesim_core::users::{NewUser, User, UserCredentials, UserRepositoryTrait};

/// Repository for managing user data in the database.
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let user_db: UserDB = new_user.into();

                diesel::insert_into(crate::schema::users::table)
                    .values(&user_db)
                    .execute(conn)
                    .into_core()?;

                Ok(user_db.into())
            })
            .await
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user = users
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .into_core()?;

        Ok(user.into())
    }

    fn get_credentials(&self, email_param: &str) -> Result<Option<UserCredentials>> {
        let mut conn = get_connection(&self.pool)?;

        let found = users
            .select(UserDB::as_select())
            .filter(email.eq(email_param.trim().to_lowercase()))
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(found.map(|db| UserCredentials {
            password_hash: db.password_hash.clone(),
            user: db.into(),
        }))
    }
}
