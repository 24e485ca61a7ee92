use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::db::DbPool;
use crate::dto::LocationResponse;
use crate::entities::{asset, location};
use crate::errors::ServiceError;

/// Service for managing physical locations.
#[derive(Clone)]
pub struct LocationService {
    db: Arc<DbPool>,
}

#[derive(Debug, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct CreateLocationInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub contact_person: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct UpdateLocationInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub contact_person: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl LocationService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Lists active locations with their asset counts.
    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> Result<Vec<LocationResponse>, ServiceError> {
        let rows = location::Entity::find()
            .filter(location::Column::IsActive.eq(true))
            .order_by_asc(location::Column::Name)
            .all(&*self.db)
            .await?;

        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            let count = self.asset_count(row.id).await?;
            responses.push(LocationResponse::from_model(row, count));
        }
        Ok(responses)
    }

    #[instrument(skip(self))]
    pub async fn get_location(&self, id: i64) -> Result<LocationResponse, ServiceError> {
        let row = self.find_location(id).await?;
        let count = self.asset_count(id).await?;
        Ok(LocationResponse::from_model(row, count))
    }

    #[instrument(skip(self))]
    pub async fn create_location(
        &self,
        input: CreateLocationInput,
    ) -> Result<LocationResponse, ServiceError> {
        let model = location::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            city: Set(input.city),
            state: Set(input.state),
            country: Set(input.country),
            postal_code: Set(input.postal_code),
            contact_person: Set(input.contact_person),
            contact_email: Set(input.contact_email),
            contact_phone: Set(input.contact_phone),
            is_active: Set(input.is_active),
            ..Default::default()
        };

        let row = model.insert(&*self.db).await?;
        info!(location_id = row.id, "Location created");

        Ok(LocationResponse::from_model(row, 0))
    }

    #[instrument(skip(self))]
    pub async fn update_location(
        &self,
        id: i64,
        input: UpdateLocationInput,
    ) -> Result<LocationResponse, ServiceError> {
        let row = self.find_location(id).await?;
        let mut active: location::ActiveModel = row.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(address) = input.address {
            active.address = Set(Some(address));
        }
        if let Some(city) = input.city {
            active.city = Set(Some(city));
        }
        if let Some(state) = input.state {
            active.state = Set(Some(state));
        }
        if let Some(country) = input.country {
            active.country = Set(Some(country));
        }
        if let Some(postal_code) = input.postal_code {
            active.postal_code = Set(Some(postal_code));
        }
        if let Some(contact_person) = input.contact_person {
            active.contact_person = Set(Some(contact_person));
        }
        if let Some(contact_email) = input.contact_email {
            active.contact_email = Set(Some(contact_email));
        }
        if let Some(contact_phone) = input.contact_phone {
            active.contact_phone = Set(Some(contact_phone));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }

        let row = active.update(&*self.db).await?;
        let count = self.asset_count(row.id).await?;

        Ok(LocationResponse::from_model(row, count))
    }

    /// Hard-deletes a location. Refused while any asset references it.
    #[instrument(skip(self))]
    pub async fn delete_location(&self, id: i64) -> Result<(), ServiceError> {
        let row = self.find_location(id).await?;

        let referencing = self.asset_count(id).await?;
        if referencing > 0 {
            return Err(ServiceError::Conflict(format!(
                "Location '{}' is referenced by {} asset(s) and cannot be deleted",
                row.name, referencing
            )));
        }

        location::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(location_id = id, "Location deleted");

        Ok(())
    }

    async fn find_location(&self, id: i64) -> Result<location::Model, ServiceError> {
        location::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Location {} not found", id)))
    }

    async fn asset_count(&self, id: i64) -> Result<u64, ServiceError> {
        Ok(asset::Entity::find()
            .filter(asset::Column::LocationId.eq(id))
            .count(&*self.db)
            .await?)
    }
}
