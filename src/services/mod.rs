pub mod assets;
pub mod assignments;
pub mod categories;
pub mod dashboard;
pub mod display;
pub mod locations;
pub mod maintenance;
pub mod users;
pub mod vendors;

pub use assets::AssetService;
pub use assignments::AssignmentService;
pub use categories::CategoryService;
pub use dashboard::DashboardService;
pub use locations::LocationService;
pub use maintenance::MaintenanceService;
pub use users::UserService;
pub use vendors::VendorService;
