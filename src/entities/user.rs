use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account identity owned by the external identity provider.
/// This API only reads user rows; it never creates or mutates them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Model {
    /// Display name: "first last" when either is present, otherwise the
    /// username.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset::Entity")]
    AssignedAssets,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedAssets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> Model {
        Model {
            id: 1,
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            first_name: first.into(),
            last_name: last.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(user("Jamie", "Doe").full_name(), "Jamie Doe");
        assert_eq!(user("Jamie", "").full_name(), "Jamie");
    }

    #[test]
    fn full_name_falls_back_to_username() {
        assert_eq!(user("", "").full_name(), "jdoe");
    }
}
