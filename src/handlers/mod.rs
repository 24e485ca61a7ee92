pub mod assets;
pub mod assignments;
pub mod categories;
pub mod common;
pub mod dashboard;
pub mod health;
pub mod locations;
pub mod maintenance;
pub mod users;
pub mod vendors;

use std::sync::Arc;

use crate::db::DbPool;
use crate::services::{
    AssetService, AssignmentService, CategoryService, DashboardService, LocationService,
    MaintenanceService, UserService, VendorService,
};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub locations: Arc<LocationService>,
    pub vendors: Arc<VendorService>,
    pub users: Arc<UserService>,
    pub assets: Arc<AssetService>,
    pub assignments: Arc<AssignmentService>,
    pub maintenance: Arc<MaintenanceService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build the service container on top of a shared connection pool.
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(db.clone())),
            locations: Arc::new(LocationService::new(db.clone())),
            vendors: Arc::new(VendorService::new(db.clone())),
            users: Arc::new(UserService::new(db.clone())),
            assets: Arc::new(AssetService::new(db.clone())),
            assignments: Arc::new(AssignmentService::new(db.clone())),
            maintenance: Arc::new(MaintenanceService::new(db.clone())),
            dashboard: Arc::new(DashboardService::new(db)),
        }
    }
}
