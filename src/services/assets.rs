use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionError, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::db::DbPool;
use crate::dto::{AssetHistoryResponse, AssetResponse};
use crate::entities::{asset, asset_assignment, asset_category, location, maintenance_record, user, vendor};
use crate::errors::ServiceError;
use crate::models::{AssetCondition, AssetStatus};
use crate::services::display;

/// Service for managing assets and their assignment lifecycle.
#[derive(Clone)]
pub struct AssetService {
    db: Arc<DbPool>,
}

#[derive(Debug, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct CreateAssetInput {
    #[validate(length(min = 1, max = 50))]
    pub asset_tag: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    #[serde(default = "default_status")]
    pub status: AssetStatus,
    #[serde(default = "default_condition")]
    pub condition: AssetCondition,
    pub location_id: i64,
    pub assigned_to_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub invoice_number: Option<String>,
    pub warranty_start_date: Option<NaiveDate>,
    pub warranty_end_date: Option<NaiveDate>,
    pub warranty_provider: Option<String>,
    pub notes: Option<String>,
    pub qr_code: Option<String>,
    pub current_value: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct UpdateAssetInput {
    #[validate(length(min = 1, max = 50))]
    pub asset_tag: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<AssetStatus>,
    pub condition: Option<AssetCondition>,
    pub location_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub invoice_number: Option<String>,
    pub warranty_start_date: Option<NaiveDate>,
    pub warranty_end_date: Option<NaiveDate>,
    pub warranty_provider: Option<String>,
    pub notes: Option<String>,
    pub qr_code: Option<String>,
    pub current_value: Option<Decimal>,
}

/// Body of `POST /assets/{id}/assign`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AssignAssetInput {
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
}

/// Body of `POST /assets/{id}/unassign`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UnassignAssetInput {
    pub notes: Option<String>,
}

fn default_status() -> AssetStatus {
    AssetStatus::Available
}

fn default_condition() -> AssetCondition {
    AssetCondition::Good
}

impl AssetService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_assets(&self) -> Result<Vec<AssetResponse>, ServiceError> {
        let rows = asset::Entity::find()
            .order_by_asc(asset::Column::Id)
            .all(&*self.db)
            .await?;

        display::asset_responses(&*self.db, rows).await
    }

    #[instrument(skip(self))]
    pub async fn get_asset(&self, id: i64) -> Result<AssetResponse, ServiceError> {
        let row = self.find_asset(id).await?;
        display::asset_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn create_asset(
        &self,
        input: CreateAssetInput,
    ) -> Result<AssetResponse, ServiceError> {
        self.ensure_unique_tag(&input.asset_tag, None).await?;
        self.ensure_category_exists(input.category_id).await?;
        self.ensure_location_exists(input.location_id).await?;
        if let Some(vendor_id) = input.vendor_id {
            self.ensure_vendor_exists(vendor_id).await?;
        }
        if let Some(user_id) = input.assigned_to_id {
            self.ensure_user_exists(user_id).await?;
        }

        let model = asset::ActiveModel {
            asset_tag: Set(input.asset_tag),
            name: Set(input.name),
            description: Set(input.description),
            category_id: Set(input.category_id),
            brand: Set(input.brand),
            model: Set(input.model),
            serial_number: Set(input.serial_number),
            status: Set(input.status),
            condition: Set(input.condition),
            location_id: Set(input.location_id),
            assigned_to_id: Set(input.assigned_to_id),
            vendor_id: Set(input.vendor_id),
            purchase_date: Set(input.purchase_date),
            purchase_cost: Set(input.purchase_cost),
            invoice_number: Set(input.invoice_number),
            warranty_start_date: Set(input.warranty_start_date),
            warranty_end_date: Set(input.warranty_end_date),
            warranty_provider: Set(input.warranty_provider),
            notes: Set(input.notes),
            qr_code: Set(input.qr_code),
            current_value: Set(input.current_value),
            ..Default::default()
        };

        let row = model.insert(&*self.db).await?;
        info!(asset_id = row.id, asset_tag = %row.asset_tag, "Asset created");

        display::asset_response(&*self.db, row).await
    }

    #[instrument(skip(self))]
    pub async fn update_asset(
        &self,
        id: i64,
        input: UpdateAssetInput,
    ) -> Result<AssetResponse, ServiceError> {
        if let Some(ref tag) = input.asset_tag {
            self.ensure_unique_tag(tag, Some(id)).await?;
        }
        if let Some(category_id) = input.category_id {
            self.ensure_category_exists(category_id).await?;
        }
        if let Some(location_id) = input.location_id {
            self.ensure_location_exists(location_id).await?;
        }
        if let Some(vendor_id) = input.vendor_id {
            self.ensure_vendor_exists(vendor_id).await?;
        }

        let row = self.find_asset(id).await?;
        let mut active: asset::ActiveModel = row.into();

        if let Some(asset_tag) = input.asset_tag {
            active.asset_tag = Set(asset_tag);
        }
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(category_id) = input.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(brand) = input.brand {
            active.brand = Set(Some(brand));
        }
        if let Some(model) = input.model {
            active.model = Set(Some(model));
        }
        if let Some(serial_number) = input.serial_number {
            active.serial_number = Set(Some(serial_number));
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(condition) = input.condition {
            active.condition = Set(condition);
        }
        if let Some(location_id) = input.location_id {
            active.location_id = Set(location_id);
        }
        if let Some(vendor_id) = input.vendor_id {
            active.vendor_id = Set(Some(vendor_id));
        }
        if let Some(purchase_date) = input.purchase_date {
            active.purchase_date = Set(Some(purchase_date));
        }
        if let Some(purchase_cost) = input.purchase_cost {
            active.purchase_cost = Set(Some(purchase_cost));
        }
        if let Some(invoice_number) = input.invoice_number {
            active.invoice_number = Set(Some(invoice_number));
        }
        if let Some(warranty_start_date) = input.warranty_start_date {
            active.warranty_start_date = Set(Some(warranty_start_date));
        }
        if let Some(warranty_end_date) = input.warranty_end_date {
            active.warranty_end_date = Set(Some(warranty_end_date));
        }
        if let Some(warranty_provider) = input.warranty_provider {
            active.warranty_provider = Set(Some(warranty_provider));
        }
        if let Some(notes) = input.notes {
            active.notes = Set(Some(notes));
        }
        if let Some(qr_code) = input.qr_code {
            active.qr_code = Set(Some(qr_code));
        }
        if let Some(current_value) = input.current_value {
            active.current_value = Set(Some(current_value));
        }

        let row = active.update(&*self.db).await?;

        display::asset_response(&*self.db, row).await
    }

    /// Hard-deletes an asset; assignment and maintenance history rows
    /// cascade with it.
    #[instrument(skip(self))]
    pub async fn delete_asset(&self, id: i64) -> Result<(), ServiceError> {
        self.find_asset(id).await?;

        asset::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(asset_id = id, "Asset deleted");

        Ok(())
    }

    /// Assigns an asset to a person and records the assignment episode.
    ///
    /// At most one assignment row per asset stays active: any still-open
    /// row is closed inside the same transaction before the new one is
    /// inserted, so reassignment never accumulates duplicate active
    /// history.
    #[instrument(skip(self))]
    pub async fn assign_asset(
        &self,
        asset_id: i64,
        input: AssignAssetInput,
        acting_user_id: i64,
    ) -> Result<(), ServiceError> {
        let assigned_to_id = input.assigned_to.ok_or_else(|| {
            ServiceError::ValidationError("assigned_to is required".to_string())
        })?;
        let notes = input.notes.filter(|n| !n.is_empty());

        self.db
            .transaction::<_, (), ServiceError>(move |txn| {
                Box::pin(async move {
                    let asset_row = asset::Entity::find_by_id(asset_id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            ServiceError::NotFound(format!("Asset {} not found", asset_id))
                        })?;

                    let assignee = user::Entity::find_by_id(assigned_to_id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

                    let assigner = user::Entity::find_by_id(acting_user_id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            ServiceError::Unauthorized(format!(
                                "Acting user {} does not exist",
                                acting_user_id
                            ))
                        })?;

                    let now = Utc::now();

                    close_active_assignments(txn, asset_id, now, None).await?;

                    let mut active: asset::ActiveModel = asset_row.into();
                    active.assigned_to_id = Set(Some(assignee.id));
                    active.status = Set(AssetStatus::Assigned);
                    active.update(txn).await?;

                    asset_assignment::ActiveModel {
                        asset_id: Set(asset_id),
                        assigned_to_id: Set(assignee.id),
                        assigned_by_id: Set(assigner.id),
                        assigned_date: Set(now),
                        return_date: Set(None),
                        notes: Set(notes),
                        is_active: Set(true),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    info!(
                        asset_id,
                        assigned_to = assignee.id,
                        assigned_by = assigner.id,
                        "Asset assigned"
                    );

                    Ok(())
                })
            })
            .await
            .map_err(flatten_txn_err)
    }

    /// Returns an assigned asset to the pool. A no-op that still reports
    /// success when the asset has no assignee.
    #[instrument(skip(self))]
    pub async fn unassign_asset(
        &self,
        asset_id: i64,
        input: UnassignAssetInput,
    ) -> Result<(), ServiceError> {
        let notes = input.notes.filter(|n| !n.is_empty());

        self.db
            .transaction::<_, (), ServiceError>(move |txn| {
                Box::pin(async move {
                    let asset_row = asset::Entity::find_by_id(asset_id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            ServiceError::NotFound(format!("Asset {} not found", asset_id))
                        })?;

                    if asset_row.assigned_to_id.is_none() {
                        return Ok(());
                    }

                    let now = Utc::now();

                    close_active_assignments(txn, asset_id, now, notes.as_deref()).await?;

                    let mut active: asset::ActiveModel = asset_row.into();
                    active.assigned_to_id = Set(None);
                    active.status = Set(AssetStatus::Available);
                    active.update(txn).await?;

                    info!(asset_id, "Asset unassigned");

                    Ok(())
                })
            })
            .await
            .map_err(flatten_txn_err)
    }

    /// Full assignment and maintenance history of an asset, newest first.
    #[instrument(skip(self))]
    pub async fn asset_history(&self, asset_id: i64) -> Result<AssetHistoryResponse, ServiceError> {
        self.find_asset(asset_id).await?;

        let assignments = asset_assignment::Entity::find()
            .filter(asset_assignment::Column::AssetId.eq(asset_id))
            .order_by_desc(asset_assignment::Column::AssignedDate)
            .order_by_desc(asset_assignment::Column::Id)
            .all(&*self.db)
            .await?;

        let maintenance = maintenance_record::Entity::find()
            .filter(maintenance_record::Column::AssetId.eq(asset_id))
            .order_by_desc(maintenance_record::Column::CreatedAt)
            .order_by_desc(maintenance_record::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(AssetHistoryResponse {
            assignments: display::assignment_responses(&*self.db, assignments).await?,
            maintenance: display::maintenance_responses(&*self.db, maintenance).await?,
        })
    }

    async fn find_asset(&self, id: i64) -> Result<asset::Model, ServiceError> {
        asset::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Asset {} not found", id)))
    }

    async fn ensure_unique_tag(
        &self,
        tag: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        let mut query = asset::Entity::find().filter(asset::Column::AssetTag.eq(tag));
        if let Some(id) = exclude_id {
            query = query.filter(asset::Column::Id.ne(id));
        }

        if query.count(&*self.db).await? > 0 {
            return Err(ServiceError::Conflict(format!(
                "Asset tag '{}' is already in use",
                tag
            )));
        }

        Ok(())
    }

    async fn ensure_category_exists(&self, id: i64) -> Result<(), ServiceError> {
        asset_category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("Category {} not found", id)))
    }

    async fn ensure_location_exists(&self, id: i64) -> Result<(), ServiceError> {
        location::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("Location {} not found", id)))
    }

    async fn ensure_vendor_exists(&self, id: i64) -> Result<(), ServiceError> {
        vendor::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("Vendor {} not found", id)))
    }

    async fn ensure_user_exists(&self, id: i64) -> Result<(), ServiceError> {
        user::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))
    }
}

/// Closes every active assignment row for the asset, newest first. The
/// return note, when supplied, is appended to each closed row's notes.
async fn close_active_assignments<C: ConnectionTrait>(
    txn: &C,
    asset_id: i64,
    closed_at: chrono::DateTime<Utc>,
    return_notes: Option<&str>,
) -> Result<(), ServiceError> {
    let open_rows = asset_assignment::Entity::find()
        .filter(asset_assignment::Column::AssetId.eq(asset_id))
        .filter(asset_assignment::Column::IsActive.eq(true))
        .order_by_desc(asset_assignment::Column::AssignedDate)
        .order_by_desc(asset_assignment::Column::Id)
        .all(txn)
        .await?;

    for row in open_rows {
        let combined_notes = match return_notes {
            Some(note) => Some(format!(
                "{}\nReturned: {}",
                row.notes.clone().unwrap_or_default(),
                note
            )),
            None => row.notes.clone(),
        };

        let mut active: asset_assignment::ActiveModel = row.into();
        active.is_active = Set(false);
        active.return_date = Set(Some(closed_at));
        active.notes = Set(combined_notes);
        active.update(txn).await?;
    }

    Ok(())
}

fn flatten_txn_err(err: TransactionError<ServiceError>) -> ServiceError {
    match err {
        TransactionError::Connection(db_err) => ServiceError::DatabaseError(db_err),
        TransactionError::Transaction(service_err) => service_err,
    }
}
