use std::sync::Arc;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::db::DbPool;
use crate::dto::UserResponse;
use crate::entities::user;
use crate::errors::ServiceError;

/// Read-only access to user identities. User rows are owned by the
/// external identity provider; this service never mutates them.
#[derive(Clone)]
pub struct UserService {
    db: Arc<DbPool>,
}

impl UserService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Lists active users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let rows = user::Entity::find()
            .filter(user::Column::IsActive.eq(true))
            .order_by_asc(user::Column::Username)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> Result<UserResponse, ServiceError> {
        let row = user::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))?;

        Ok(UserResponse::from(row))
    }
}
