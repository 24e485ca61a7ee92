use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::db::DbPool;
use crate::dto::VendorResponse;
use crate::entities::{asset, vendor};
use crate::errors::ServiceError;

/// Service for managing vendors.
#[derive(Clone)]
pub struct VendorService {
    db: Arc<DbPool>,
}

#[derive(Debug, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct CreateVendorInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub contact_person: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct UpdateVendorInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub contact_person: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl VendorService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Lists active vendors with their asset counts.
    #[instrument(skip(self))]
    pub async fn list_vendors(&self) -> Result<Vec<VendorResponse>, ServiceError> {
        let rows = vendor::Entity::find()
            .filter(vendor::Column::IsActive.eq(true))
            .order_by_asc(vendor::Column::Name)
            .all(&*self.db)
            .await?;

        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            let count = self.asset_count(row.id).await?;
            responses.push(VendorResponse::from_model(row, count));
        }
        Ok(responses)
    }

    #[instrument(skip(self))]
    pub async fn get_vendor(&self, id: i64) -> Result<VendorResponse, ServiceError> {
        let row = self.find_vendor(id).await?;
        let count = self.asset_count(id).await?;
        Ok(VendorResponse::from_model(row, count))
    }

    #[instrument(skip(self))]
    pub async fn create_vendor(
        &self,
        input: CreateVendorInput,
    ) -> Result<VendorResponse, ServiceError> {
        let model = vendor::ActiveModel {
            name: Set(input.name),
            contact_person: Set(input.contact_person),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
            website: Set(input.website),
            notes: Set(input.notes),
            is_active: Set(input.is_active),
            ..Default::default()
        };

        let row = model.insert(&*self.db).await?;
        info!(vendor_id = row.id, "Vendor created");

        Ok(VendorResponse::from_model(row, 0))
    }

    #[instrument(skip(self))]
    pub async fn update_vendor(
        &self,
        id: i64,
        input: UpdateVendorInput,
    ) -> Result<VendorResponse, ServiceError> {
        let row = self.find_vendor(id).await?;
        let mut active: vendor::ActiveModel = row.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(contact_person) = input.contact_person {
            active.contact_person = Set(Some(contact_person));
        }
        if let Some(email) = input.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = input.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(address) = input.address {
            active.address = Set(Some(address));
        }
        if let Some(website) = input.website {
            active.website = Set(Some(website));
        }
        if let Some(notes) = input.notes {
            active.notes = Set(Some(notes));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }

        let row = active.update(&*self.db).await?;
        let count = self.asset_count(row.id).await?;

        Ok(VendorResponse::from_model(row, count))
    }

    /// Hard-deletes a vendor. Assets referencing it keep existing with
    /// their vendor reference cleared by the schema's SET NULL action.
    #[instrument(skip(self))]
    pub async fn delete_vendor(&self, id: i64) -> Result<(), ServiceError> {
        self.find_vendor(id).await?;

        vendor::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(vendor_id = id, "Vendor deleted");

        Ok(())
    }

    async fn find_vendor(&self, id: i64) -> Result<vendor::Model, ServiceError> {
        vendor::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Vendor {} not found", id)))
    }

    async fn asset_count(&self, id: i64) -> Result<u64, ServiceError> {
        Ok(asset::Entity::find()
            .filter(asset::Column::VendorId.eq(id))
            .count(&*self.db)
            .await?)
    }
}
