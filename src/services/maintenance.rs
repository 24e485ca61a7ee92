use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::db::DbPool;
use crate::dto::MaintenanceResponse;
use crate::entities::{asset, maintenance_record, user, vendor};
use crate::errors::ServiceError;
use crate::models::{MaintenanceStatus, MaintenanceType};
use crate::services::display;

/// Service for managing maintenance records.
#[derive(Clone)]
pub struct MaintenanceService {
    db: Arc<DbPool>,
}

#[derive(Debug, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct CreateMaintenanceInput {
    pub asset_id: i64,
    pub maintenance_type: MaintenanceType,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default = "default_status")]
    pub status: MaintenanceStatus,
    pub vendor_id: Option<i64>,
    pub cost: Option<Decimal>,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct UpdateMaintenanceInput {
    pub maintenance_type: Option<MaintenanceType>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: Option<MaintenanceStatus>,
    pub vendor_id: Option<i64>,
    pub cost: Option<Decimal>,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
}

fn default_status() -> MaintenanceStatus {
    MaintenanceStatus::Scheduled
}

impl MaintenanceService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_maintenance(&self) -> Result<Vec<MaintenanceResponse>, ServiceError> {
        let rows = maintenance_record::Entity::find()
            .order_by_asc(maintenance_record::Column::ScheduledDate)
            .order_by_asc(maintenance_record::Column::Id)
            .all(&*self.db)
            .await?;

        display::maintenance_responses(&*self.db, rows).await
    }

    #[instrument(skip(self))]
    pub async fn get_maintenance(&self, id: i64) -> Result<MaintenanceResponse, ServiceError> {
        let row = self.find_record(id).await?;
        display::maintenance_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn create_maintenance(
        &self,
        input: CreateMaintenanceInput,
        acting_user_id: i64,
    ) -> Result<MaintenanceResponse, ServiceError> {
        self.ensure_asset_exists(input.asset_id).await?;
        if let Some(vendor_id) = input.vendor_id {
            self.ensure_vendor_exists(vendor_id).await?;
        }

        let creator = user::Entity::find_by_id(acting_user_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::Unauthorized(format!("Acting user {} does not exist", acting_user_id))
            })?;

        let model = maintenance_record::ActiveModel {
            asset_id: Set(input.asset_id),
            maintenance_type: Set(input.maintenance_type),
            title: Set(input.title),
            description: Set(input.description),
            scheduled_date: Set(input.scheduled_date),
            completed_date: Set(input.completed_date),
            status: Set(input.status),
            vendor_id: Set(input.vendor_id),
            cost: Set(input.cost),
            performed_by: Set(input.performed_by),
            notes: Set(input.notes),
            created_by_id: Set(creator.id),
            ..Default::default()
        };

        let row = model.insert(&*self.db).await?;
        info!(
            maintenance_id = row.id,
            asset_id = row.asset_id,
            "Maintenance record created"
        );

        display::maintenance_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn update_maintenance(
        &self,
        id: i64,
        input: UpdateMaintenanceInput,
    ) -> Result<MaintenanceResponse, ServiceError> {
        if let Some(vendor_id) = input.vendor_id {
            self.ensure_vendor_exists(vendor_id).await?;
        }

        let row = self.find_record(id).await?;
        let mut active: maintenance_record::ActiveModel = row.into();

        if let Some(maintenance_type) = input.maintenance_type {
            active.maintenance_type = Set(maintenance_type);
        }
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(scheduled_date) = input.scheduled_date {
            active.scheduled_date = Set(scheduled_date);
        }
        if let Some(completed_date) = input.completed_date {
            active.completed_date = Set(Some(completed_date));
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(vendor_id) = input.vendor_id {
            active.vendor_id = Set(Some(vendor_id));
        }
        if let Some(cost) = input.cost {
            active.cost = Set(Some(cost));
        }
        if let Some(performed_by) = input.performed_by {
            active.performed_by = Set(Some(performed_by));
        }
        if let Some(notes) = input.notes {
            active.notes = Set(Some(notes));
        }

        let row = active.update(&*self.db).await?;

        display::maintenance_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn delete_maintenance(&self, id: i64) -> Result<(), ServiceError> {
        self.find_record(id).await?;

        maintenance_record::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        info!(maintenance_id = id, "Maintenance record deleted");

        Ok(())
    }

    async fn find_record(&self, id: i64) -> Result<maintenance_record::Model, ServiceError> {
        maintenance_record::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Maintenance record {} not found", id)))
    }

    async fn ensure_asset_exists(&self, id: i64) -> Result<(), ServiceError> {
        asset::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("Asset {} not found", id)))
    }

    async fn ensure_vendor_exists(&self, id: i64) -> Result<(), ServiceError> {
        vendor::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("Vendor {} not found", id)))
    }
}
