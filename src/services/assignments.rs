use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::db::DbPool;
use crate::dto::AssignmentResponse;
use crate::entities::{asset, asset_assignment, user};
use crate::errors::ServiceError;
use crate::services::display;

/// Direct CRUD over assignment history rows. The assignment *lifecycle*
/// (state transitions on the asset itself) lives in `AssetService`.
#[derive(Clone)]
pub struct AssignmentService {
    db: Arc<DbPool>,
}

#[derive(Debug, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct CreateAssignmentInput {
    pub asset_id: i64,
    pub assigned_to_id: i64,
    /// Defaults to the acting identity when omitted.
    pub assigned_by_id: Option<i64>,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// `assigned_date` is immutable and deliberately absent here.
#[derive(Debug, Default, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct UpdateAssignmentInput {
    pub assigned_to_id: Option<i64>,
    pub assigned_by_id: Option<i64>,
    pub return_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl AssignmentService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_assignments(&self) -> Result<Vec<AssignmentResponse>, ServiceError> {
        let rows = asset_assignment::Entity::find()
            .order_by_desc(asset_assignment::Column::AssignedDate)
            .order_by_desc(asset_assignment::Column::Id)
            .all(&*self.db)
            .await?;

        display::assignment_responses(&*self.db, rows).await
    }

    #[instrument(skip(self))]
    pub async fn get_assignment(&self, id: i64) -> Result<AssignmentResponse, ServiceError> {
        let row = self.find_assignment(id).await?;
        display::assignment_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn create_assignment(
        &self,
        input: CreateAssignmentInput,
        acting_user_id: i64,
    ) -> Result<AssignmentResponse, ServiceError> {
        self.ensure_asset_exists(input.asset_id).await?;
        self.ensure_user_exists(input.assigned_to_id).await?;
        let assigned_by_id = input.assigned_by_id.unwrap_or(acting_user_id);
        self.ensure_user_exists(assigned_by_id).await?;

        let model = asset_assignment::ActiveModel {
            asset_id: Set(input.asset_id),
            assigned_to_id: Set(input.assigned_to_id),
            assigned_by_id: Set(assigned_by_id),
            assigned_date: Set(Utc::now()),
            return_date: Set(None),
            notes: Set(input.notes),
            is_active: Set(input.is_active),
            ..Default::default()
        };

        let row = model.insert(&*self.db).await?;
        info!(assignment_id = row.id, asset_id = row.asset_id, "Assignment created");

        display::assignment_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn update_assignment(
        &self,
        id: i64,
        input: UpdateAssignmentInput,
    ) -> Result<AssignmentResponse, ServiceError> {
        if let Some(assigned_to_id) = input.assigned_to_id {
            self.ensure_user_exists(assigned_to_id).await?;
        }
        if let Some(assigned_by_id) = input.assigned_by_id {
            self.ensure_user_exists(assigned_by_id).await?;
        }

        let row = self.find_assignment(id).await?;
        let mut active: asset_assignment::ActiveModel = row.into();

        if let Some(assigned_to_id) = input.assigned_to_id {
            active.assigned_to_id = Set(assigned_to_id);
        }
        if let Some(assigned_by_id) = input.assigned_by_id {
            active.assigned_by_id = Set(assigned_by_id);
        }
        if let Some(return_date) = input.return_date {
            active.return_date = Set(Some(return_date));
        }
        if let Some(notes) = input.notes {
            active.notes = Set(Some(notes));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }

        let row = active.update(&*self.db).await?;

        display::assignment_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn delete_assignment(&self, id: i64) -> Result<(), ServiceError> {
        self.find_assignment(id).await?;

        asset_assignment::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        info!(assignment_id = id, "Assignment deleted");

        Ok(())
    }

    async fn find_assignment(&self, id: i64) -> Result<asset_assignment::Model, ServiceError> {
        asset_assignment::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Assignment {} not found", id)))
    }

    async fn ensure_asset_exists(&self, id: i64) -> Result<(), ServiceError> {
        asset::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("Asset {} not found", id)))
    }

    async fn ensure_user_exists(&self, id: i64) -> Result<(), ServiceError> {
        user::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))
    }
}
