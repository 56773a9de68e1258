//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use financas_core::user::{NewUserRecord, User, UserError, UserStore};
use financas_shared::types::UserId;

use crate::entities::users;

/// User repository implementing the core's [`UserStore`] contract.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserStore for UserRepository {
    async fn insert(&self, user: NewUserRecord) -> Result<User, UserError> {
        let now = chrono::Utc::now().into();
        let model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_user(model))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let model = users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_user))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        Ok(count > 0)
    }
}

fn db_err(err: DbErr) -> UserError {
    UserError::Database(err.to_string())
}

fn model_to_user(model: users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_user_maps_every_field() {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now().into();
        let model = users::Model {
            id,
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: now,
            updated_at: now,
        };

        let user = model_to_user(model);
        assert_eq!(user.id.into_inner(), id);
        assert_eq!(user.name, "Maria");
        assert_eq!(user.email, "maria@example.com");
        assert_eq!(user.password_hash, "$argon2id$stub");
    }
}
