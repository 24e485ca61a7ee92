//! Batch resolution of display names for response construction.
//!
//! Derived fields (`category_name`, `assigned_to_name`, ...) are computed
//! here at response-construction time; they are never stored.

use std::collections::{HashMap, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::dto::{
    AssetNames, AssetResponse, AssignmentNames, AssignmentResponse, MaintenanceNames,
    MaintenanceResponse,
};
use crate::entities::{asset, asset_assignment, asset_category, location, maintenance_record, user, vendor};
use crate::errors::ServiceError;

async fn category_names<C: ConnectionTrait>(
    db: &C,
    ids: &HashSet<i64>,
) -> Result<HashMap<i64, String>, ServiceError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = asset_category::Entity::find()
        .filter(asset_category::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
}

async fn location_names<C: ConnectionTrait>(
    db: &C,
    ids: &HashSet<i64>,
) -> Result<HashMap<i64, String>, ServiceError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = location::Entity::find()
        .filter(location::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|l| (l.id, l.name)).collect())
}

async fn vendor_names<C: ConnectionTrait>(
    db: &C,
    ids: &HashSet<i64>,
) -> Result<HashMap<i64, String>, ServiceError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = vendor::Entity::find()
        .filter(vendor::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|v| (v.id, v.name)).collect())
}

async fn user_full_names<C: ConnectionTrait>(
    db: &C,
    ids: &HashSet<i64>,
) -> Result<HashMap<i64, String>, ServiceError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = user::Entity::find()
        .filter(user::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|u| (u.id, u.full_name())).collect())
}

async fn asset_labels<C: ConnectionTrait>(
    db: &C,
    ids: &HashSet<i64>,
) -> Result<HashMap<i64, (String, String)>, ServiceError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = asset::Entity::find()
        .filter(asset::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|a| (a.id, (a.name, a.asset_tag)))
        .collect())
}

fn name_or_empty(map: &HashMap<i64, String>, id: i64) -> String {
    map.get(&id).cloned().unwrap_or_default()
}

/// Builds full asset responses for a batch of rows with one lookup per
/// referenced table.
pub async fn asset_responses<C: ConnectionTrait>(
    db: &C,
    rows: Vec<asset::Model>,
) -> Result<Vec<AssetResponse>, ServiceError> {
    let category_ids: HashSet<i64> = rows.iter().map(|a| a.category_id).collect();
    let location_ids: HashSet<i64> = rows.iter().map(|a| a.location_id).collect();
    let vendor_ids: HashSet<i64> = rows.iter().filter_map(|a| a.vendor_id).collect();
    let user_ids: HashSet<i64> = rows.iter().filter_map(|a| a.assigned_to_id).collect();

    let categories = category_names(db, &category_ids).await?;
    let locations = location_names(db, &location_ids).await?;
    let vendors = vendor_names(db, &vendor_ids).await?;
    let users = user_full_names(db, &user_ids).await?;

    Ok(rows
        .into_iter()
        .map(|a| {
            let names = AssetNames {
                category_name: name_or_empty(&categories, a.category_id),
                location_name: name_or_empty(&locations, a.location_id),
                assigned_to_name: a
                    .assigned_to_id
                    .map(|id| name_or_empty(&users, id))
                    .unwrap_or_default(),
                vendor_name: a
                    .vendor_id
                    .map(|id| name_or_empty(&vendors, id))
                    .unwrap_or_default(),
            };
            AssetResponse::from_model(a, names)
        })
        .collect())
}

pub async fn asset_response<C: ConnectionTrait>(
    db: &C,
    row: asset::Model,
) -> Result<AssetResponse, ServiceError> {
    let mut responses = asset_responses(db, vec![row]).await?;
    responses.pop().ok_or(ServiceError::InternalServerError)
}

/// Builds assignment responses with asset and user display fields resolved.
pub async fn assignment_responses<C: ConnectionTrait>(
    db: &C,
    rows: Vec<asset_assignment::Model>,
) -> Result<Vec<AssignmentResponse>, ServiceError> {
    let asset_ids: HashSet<i64> = rows.iter().map(|r| r.asset_id).collect();
    let user_ids: HashSet<i64> = rows
        .iter()
        .flat_map(|r| [r.assigned_to_id, r.assigned_by_id])
        .collect();

    let assets = asset_labels(db, &asset_ids).await?;
    let users = user_full_names(db, &user_ids).await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let (asset_name, asset_tag) = assets.get(&r.asset_id).cloned().unwrap_or_default();
            let names = AssignmentNames {
                asset_name,
                asset_tag,
                assigned_to_name: name_or_empty(&users, r.assigned_to_id),
                assigned_by_name: name_or_empty(&users, r.assigned_by_id),
            };
            AssignmentResponse::from_model(r, names)
        })
        .collect())
}

pub async fn assignment_response<C: ConnectionTrait>(
    db: &C,
    row: asset_assignment::Model,
) -> Result<AssignmentResponse, ServiceError> {
    let mut responses = assignment_responses(db, vec![row]).await?;
    responses.pop().ok_or(ServiceError::InternalServerError)
}

/// Builds maintenance responses with asset, vendor, and creator fields
/// resolved.
pub async fn maintenance_responses<C: ConnectionTrait>(
    db: &C,
    rows: Vec<maintenance_record::Model>,
) -> Result<Vec<MaintenanceResponse>, ServiceError> {
    let asset_ids: HashSet<i64> = rows.iter().map(|r| r.asset_id).collect();
    let vendor_ids: HashSet<i64> = rows.iter().filter_map(|r| r.vendor_id).collect();
    let user_ids: HashSet<i64> = rows.iter().map(|r| r.created_by_id).collect();

    let assets = asset_labels(db, &asset_ids).await?;
    let vendors = vendor_names(db, &vendor_ids).await?;
    let users = user_full_names(db, &user_ids).await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let (asset_name, asset_tag) = assets.get(&r.asset_id).cloned().unwrap_or_default();
            let names = MaintenanceNames {
                asset_name,
                asset_tag,
                vendor_name: r
                    .vendor_id
                    .map(|id| name_or_empty(&vendors, id))
                    .unwrap_or_default(),
                created_by_name: name_or_empty(&users, r.created_by_id),
            };
            MaintenanceResponse::from_model(r, names)
        })
        .collect())
}

pub async fn maintenance_response<C: ConnectionTrait>(
    db: &C,
    row: maintenance_record::Model,
) -> Result<MaintenanceResponse, ServiceError> {
    let mut responses = maintenance_responses(db, vec![row]).await?;
    responses.pop().ok_or(ServiceError::InternalServerError)
}
