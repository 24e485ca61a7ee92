use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::instrument;

use crate::db::DbPool;
use crate::dto::{Alert, AlertSeverity, AlertsResponse, DashboardStats};
use crate::entities::{asset, asset_assignment, asset_category, location, maintenance_record, vendor};
use crate::errors::ServiceError;
use crate::models::{AssetStatus, MaintenanceStatus};
use crate::services::display;

const TOP_N: u64 = 5;

/// Read-only aggregate queries behind the dashboard endpoints. Everything
/// is computed on demand; nothing is cached or persisted.
#[derive(Clone)]
pub struct DashboardService {
    db: Arc<DbPool>,
}

#[derive(FromQueryResult)]
struct PurchaseCostSum {
    total: Option<Decimal>,
}

impl DashboardService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, ServiceError> {
        let db = &*self.db;

        let total_assets = asset::Entity::find().count(db).await?;
        let available_assets = self.count_by_status(AssetStatus::Available).await?;
        let assigned_assets = self.count_by_status(AssetStatus::Assigned).await?;
        let maintenance_assets = self.count_by_status(AssetStatus::Maintenance).await?;

        let total_value = asset::Entity::find()
            .select_only()
            .column_as(asset::Column::PurchaseCost.sum(), "total")
            .into_model::<PurchaseCostSum>()
            .one(db)
            .await?
            .and_then(|row| row.total)
            .unwrap_or(Decimal::ZERO);

        let categories_count = asset_category::Entity::find()
            .filter(asset_category::Column::IsActive.eq(true))
            .count(db)
            .await?;
        let locations_count = location::Entity::find()
            .filter(location::Column::IsActive.eq(true))
            .count(db)
            .await?;
        let vendors_count = vendor::Entity::find()
            .filter(vendor::Column::IsActive.eq(true))
            .count(db)
            .await?;

        let recent_rows = asset_assignment::Entity::find()
            .filter(asset_assignment::Column::IsActive.eq(true))
            .order_by_desc(asset_assignment::Column::AssignedDate)
            .order_by_desc(asset_assignment::Column::Id)
            .limit(TOP_N)
            .all(db)
            .await?;

        let upcoming_rows = maintenance_record::Entity::find()
            .filter(maintenance_record::Column::Status.eq(MaintenanceStatus::Scheduled))
            .order_by_asc(maintenance_record::Column::ScheduledDate)
            .order_by_asc(maintenance_record::Column::Id)
            .limit(TOP_N)
            .all(db)
            .await?;

        Ok(DashboardStats {
            total_assets,
            available_assets,
            assigned_assets,
            maintenance_assets,
            total_value: total_value.to_string(),
            categories_count,
            locations_count,
            vendors_count,
            recent_assignments: display::assignment_responses(db, recent_rows).await?,
            upcoming_maintenance: display::maintenance_responses(db, upcoming_rows).await?,
        })
    }

    #[instrument(skip(self))]
    pub async fn alerts(&self) -> Result<AlertsResponse, ServiceError> {
        let db = &*self.db;
        let mut alerts = Vec::new();

        // Assets in circulation without any maintenance record.
        let in_circulation: Vec<i64> = asset::Entity::find()
            .filter(asset::Column::Status.is_in([AssetStatus::InUse, AssetStatus::Assigned]))
            .select_only()
            .column(asset::Column::Id)
            .into_tuple()
            .all(db)
            .await?;

        let with_maintenance: HashSet<i64> = maintenance_record::Entity::find()
            .select_only()
            .column(maintenance_record::Column::AssetId)
            .distinct()
            .into_tuple::<i64>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        let assets_needing_maintenance = in_circulation
            .iter()
            .filter(|id| !with_maintenance.contains(id))
            .count() as u64;

        if assets_needing_maintenance > 0 {
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                title: "Maintenance Required".to_string(),
                message: format!(
                    "{} assets may need maintenance scheduling",
                    assets_needing_maintenance
                ),
                count: assets_needing_maintenance,
            });
        }

        let overdue_maintenance = maintenance_record::Entity::find()
            .filter(maintenance_record::Column::Status.eq(MaintenanceStatus::Scheduled))
            .filter(maintenance_record::Column::ScheduledDate.lt(Utc::now()))
            .count(db)
            .await?;

        if overdue_maintenance > 0 {
            alerts.push(Alert {
                severity: AlertSeverity::Error,
                title: "Overdue Maintenance".to_string(),
                message: format!("{} maintenance tasks are overdue", overdue_maintenance),
                count: overdue_maintenance,
            });
        }

        Ok(AlertsResponse { alerts })
    }

    async fn count_by_status(&self, status: AssetStatus) -> Result<u64, ServiceError> {
        Ok(asset::Entity::find()
            .filter(asset::Column::Status.eq(status))
            .count(&*self.db)
            .await?)
    }
}
