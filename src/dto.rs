//! Response bodies for the HTTP API.
//!
//! Every entity has an explicit, versioned field list here; derived
//! read-only fields (display names, counts, `is_assigned`) are computed
//! when the response is constructed and are never stored.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{asset, asset_assignment, asset_category, location, maintenance_record, user, vendor};
use crate::models::{AssetCondition, AssetStatus, MaintenanceStatus, MaintenanceType};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        let full_name = model.full_name();
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            full_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Active child categories, nested recursively.
    #[schema(no_recursion)]
    pub children: Vec<CategoryResponse>,
}

impl CategoryResponse {
    pub fn from_model(model: asset_category::Model, children: Vec<CategoryResponse>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            icon: model.icon,
            parent_id: model.parent_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            children,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of assets referencing this location.
    pub asset_count: u64,
}

impl LocationResponse {
    pub fn from_model(model: location::Model, asset_count: u64) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            postal_code: model.postal_code,
            contact_person: model.contact_person,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            asset_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VendorResponse {
    pub id: i64,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of assets referencing this vendor.
    pub asset_count: u64,
}

impl VendorResponse {
    pub fn from_model(model: vendor::Model, asset_count: u64) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_person: model.contact_person,
            email: model.email,
            phone: model.phone,
            address: model.address,
            website: model.website,
            notes: model.notes,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            asset_count,
        }
    }
}

/// Display names resolved for an asset's references. Missing references
/// render as empty strings, matching the listing screens they feed.
#[derive(Debug, Clone, Default)]
pub struct AssetNames {
    pub category_name: String,
    pub location_name: String,
    pub assigned_to_name: String,
    pub vendor_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetResponse {
    pub id: i64,
    pub asset_tag: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub category_name: String,
    pub location_name: String,
    pub assigned_to_name: String,
    pub vendor_name: String,
    pub is_assigned: bool,
}

impl AssetResponse {
    pub fn from_model(model: asset::Model, names: AssetNames) -> Self {
        let is_assigned = model.is_assigned();
        Self {
            id: model.id,
            asset_tag: model.asset_tag,
            name: model.name,
            description: model.description,
            category_id: model.category_id,
            brand: model.brand,
            model: model.model,
            serial_number: model.serial_number,
            status: model.status,
            condition: model.condition,
            location_id: model.location_id,
            assigned_to_id: model.assigned_to_id,
            vendor_id: model.vendor_id,
            purchase_date: model.purchase_date,
            purchase_cost: model.purchase_cost,
            invoice_number: model.invoice_number,
            warranty_start_date: model.warranty_start_date,
            warranty_end_date: model.warranty_end_date,
            warranty_provider: model.warranty_provider,
            notes: model.notes,
            qr_code: model.qr_code,
            current_value: model.current_value,
            created_at: model.created_at,
            updated_at: model.updated_at,
            category_name: names.category_name,
            location_name: names.location_name,
            assigned_to_name: names.assigned_to_name,
            vendor_name: names.vendor_name,
            is_assigned,
        }
    }
}

/// Display fields resolved for an assignment row.
#[derive(Debug, Clone, Default)]
pub struct AssignmentNames {
    pub asset_name: String,
    pub asset_tag: String,
    pub assigned_to_name: String,
    pub assigned_by_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: i64,
    pub asset_id: i64,
    pub assigned_to_id: i64,
    pub assigned_by_id: i64,
    pub assigned_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub asset_name: String,
    pub asset_tag: String,
    pub assigned_to_name: String,
    pub assigned_by_name: String,
}

impl AssignmentResponse {
    pub fn from_model(model: asset_assignment::Model, names: AssignmentNames) -> Self {
        Self {
            id: model.id,
            asset_id: model.asset_id,
            assigned_to_id: model.assigned_to_id,
            assigned_by_id: model.assigned_by_id,
            assigned_date: model.assigned_date,
            return_date: model.return_date,
            notes: model.notes,
            is_active: model.is_active,
            asset_name: names.asset_name,
            asset_tag: names.asset_tag,
            assigned_to_name: names.assigned_to_name,
            assigned_by_name: names.assigned_by_name,
        }
    }
}

/// Display fields resolved for a maintenance record.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceNames {
    pub asset_name: String,
    pub asset_tag: String,
    pub vendor_name: String,
    pub created_by_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceResponse {
    pub id: i64,
    pub asset_id: i64,
    pub maintenance_type: MaintenanceType,
    pub title: String,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    pub vendor_id: Option<i64>,
    pub cost: Option<Decimal>,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i64,
    pub asset_name: String,
    pub asset_tag: String,
    pub vendor_name: String,
    pub created_by_name: String,
}

impl MaintenanceResponse {
    pub fn from_model(model: maintenance_record::Model, names: MaintenanceNames) -> Self {
        Self {
            id: model.id,
            asset_id: model.asset_id,
            maintenance_type: model.maintenance_type,
            title: model.title,
            description: model.description,
            scheduled_date: model.scheduled_date,
            completed_date: model.completed_date,
            status: model.status,
            vendor_id: model.vendor_id,
            cost: model.cost,
            performed_by: model.performed_by,
            notes: model.notes,
            created_at: model.created_at,
            created_by_id: model.created_by_id,
            asset_name: names.asset_name,
            asset_tag: names.asset_tag,
            vendor_name: names.vendor_name,
            created_by_name: names.created_by_name,
        }
    }
}

/// Assignment and maintenance history for one asset, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetHistoryResponse {
    pub assignments: Vec<AssignmentResponse>,
    pub maintenance: Vec<MaintenanceResponse>,
}

/// Aggregate counters for the dashboard, computed fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_assets: u64,
    pub available_assets: u64,
    pub assigned_assets: u64,
    pub maintenance_assets: u64,
    /// Sum of purchase costs with missing values treated as zero,
    /// reported as a decimal string.
    pub total_value: String,
    pub categories_count: u64,
    pub locations_count: u64,
    pub vendors_count: u64,
    pub recent_assignments: Vec<AssignmentResponse>,
    pub upcoming_maintenance: Vec<MaintenanceResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Error,
}

/// An advisory message produced by the alerts endpoint; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
}
