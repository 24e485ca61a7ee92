use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::db::DbPool;
use crate::dto::CategoryResponse;
use crate::entities::{asset, asset_category};
use crate::errors::ServiceError;

/// Service for managing asset categories.
#[derive(Clone)]
pub struct CategoryService {
    db: Arc<DbPool>,
}

#[derive(Debug, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, utoipa::ToSchema)]
pub struct UpdateCategoryInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

impl CategoryService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Lists active categories ordered by name, each with its active
    /// children nested recursively.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, ServiceError> {
        let rows = asset_category::Entity::find()
            .filter(asset_category::Column::IsActive.eq(true))
            .order_by_asc(asset_category::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(rows
            .iter()
            .map(|row| build_tree(row.clone(), &rows))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i64) -> Result<CategoryResponse, ServiceError> {
        let row = self.find_category(id).await?;

        let active = asset_category::Entity::find()
            .filter(asset_category::Column::IsActive.eq(true))
            .order_by_asc(asset_category::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(build_tree(row, &active))
    }

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CategoryResponse, ServiceError> {
        self.ensure_unique_name(&input.name, None).await?;

        if let Some(parent_id) = input.parent_id {
            self.find_category(parent_id).await?;
        }

        let model = asset_category::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            icon: Set(input.icon),
            parent_id: Set(input.parent_id),
            is_active: Set(input.is_active),
            ..Default::default()
        };

        let row = model.insert(&*self.db).await?;
        info!(category_id = row.id, "Category created");

        Ok(CategoryResponse::from_model(row, Vec::new()))
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: i64,
        input: UpdateCategoryInput,
    ) -> Result<CategoryResponse, ServiceError> {
        if let Some(ref name) = input.name {
            self.ensure_unique_name(name, Some(id)).await?;
        }
        if let Some(parent_id) = input.parent_id {
            self.find_category(parent_id).await?;
            self.ensure_no_cycle(id, parent_id).await?;
        }

        let row = self.find_category(id).await?;
        let mut active: asset_category::ActiveModel = row.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(icon) = input.icon {
            active.icon = Set(Some(icon));
        }
        if let Some(parent_id) = input.parent_id {
            active.parent_id = Set(Some(parent_id));
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }

        let row = active.update(&*self.db).await?;

        self.get_category(row.id).await
    }

    /// Hard-deletes a category. Refused while any asset references it.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i64) -> Result<(), ServiceError> {
        let row = self.find_category(id).await?;

        let referencing = asset::Entity::find()
            .filter(asset::Column::CategoryId.eq(id))
            .count(&*self.db)
            .await?;
        if referencing > 0 {
            return Err(ServiceError::Conflict(format!(
                "Category '{}' is referenced by {} asset(s) and cannot be deleted",
                row.name, referencing
            )));
        }

        asset_category::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(category_id = id, "Category deleted");

        Ok(())
    }

    async fn find_category(&self, id: i64) -> Result<asset_category::Model, ServiceError> {
        asset_category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category {} not found", id)))
    }

    /// Walks the parent chain upward from `new_parent_id` and refuses the
    /// reparenting if it reaches `id`. Keeps the tree acyclic so recursive
    /// reads terminate.
    async fn ensure_no_cycle(&self, id: i64, new_parent_id: i64) -> Result<(), ServiceError> {
        let mut current = Some(new_parent_id);
        while let Some(ancestor_id) = current {
            if ancestor_id == id {
                return Err(ServiceError::InvalidOperation(
                    "Category cannot be its own ancestor".to_string(),
                ));
            }
            current = asset_category::Entity::find_by_id(ancestor_id)
                .one(&*self.db)
                .await?
                .and_then(|row| row.parent_id);
        }

        Ok(())
    }

    async fn ensure_unique_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        let mut query = asset_category::Entity::find()
            .filter(asset_category::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(asset_category::Column::Id.ne(id));
        }

        if query.count(&*self.db).await? > 0 {
            return Err(ServiceError::Conflict(format!(
                "Category name '{}' is already in use",
                name
            )));
        }

        Ok(())
    }
}

/// Assembles the recursive response for `row`, resolving children from the
/// preloaded set of active categories.
fn build_tree(row: asset_category::Model, active: &[asset_category::Model]) -> CategoryResponse {
    let children = active
        .iter()
        .filter(|c| c.parent_id == Some(row.id))
        .map(|c| build_tree(c.clone(), active))
        .collect();
    CategoryResponse::from_model(row, children)
}
