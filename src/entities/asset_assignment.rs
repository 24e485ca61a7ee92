use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One historical episode of an asset being held by a person.
///
/// `assigned_date` is set when the row is created and never updated.
/// The assignment lifecycle keeps at most one row per asset with
/// `is_active = true`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub asset_id: i64,
    pub assigned_to_id: i64,
    pub assigned_by_id: i64,
    pub assigned_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id",
        on_delete = "Cascade"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedToId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    AssignedTo,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedById",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    AssignedBy,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
