pub mod asset;
pub mod asset_assignment;
pub mod asset_category;
pub mod location;
pub mod maintenance_record;
pub mod user;
pub mod vendor;
