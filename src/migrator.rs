use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_asset_categories_table::Migration),
            Box::new(m20240101_000003_create_locations_table::Migration),
            Box::new(m20240101_000004_create_vendors_table::Migration),
            Box::new(m20240101_000005_create_assets_table::Migration),
            Box::new(m20240101_000006_create_asset_assignments_table::Migration),
            Box::new(m20240101_000007_create_maintenance_records_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_users_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Users::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::Email).string().not_null())
                        .col(
                            ColumnDef::new(Users::FirstName)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Users::LastName)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Users::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        Username,
        Email,
        FirstName,
        LastName,
        IsActive,
        CreatedAt,
    }
}

mod m20240101_000002_create_asset_categories_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_asset_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AssetCategories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AssetCategories::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetCategories::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(AssetCategories::Description).text().null())
                        .col(ColumnDef::new(AssetCategories::Icon).string().null())
                        .col(
                            ColumnDef::new(AssetCategories::ParentId)
                                .big_integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AssetCategories::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(AssetCategories::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetCategories::UpdatedAt)
                                .timestamp()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_asset_categories_parent_id")
                                .from(AssetCategories::Table, AssetCategories::ParentId)
                                .to(AssetCategories::Table, AssetCategories::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_asset_categories_parent_id")
                        .table(AssetCategories::Table)
                        .col(AssetCategories::ParentId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AssetCategories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum AssetCategories {
        Table,
        Id,
        Name,
        Description,
        Icon,
        ParentId,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000003_create_locations_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_locations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Locations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Locations::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Locations::Name).string().not_null())
                        .col(ColumnDef::new(Locations::Address).text().null())
                        .col(ColumnDef::new(Locations::City).string().null())
                        .col(ColumnDef::new(Locations::State).string().null())
                        .col(ColumnDef::new(Locations::Country).string().null())
                        .col(ColumnDef::new(Locations::PostalCode).string().null())
                        .col(ColumnDef::new(Locations::ContactPerson).string().null())
                        .col(ColumnDef::new(Locations::ContactEmail).string().null())
                        .col(ColumnDef::new(Locations::ContactPhone).string().null())
                        .col(
                            ColumnDef::new(Locations::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Locations::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Locations::UpdatedAt).timestamp().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Locations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Locations {
        Table,
        Id,
        Name,
        Address,
        City,
        State,
        Country,
        PostalCode,
        ContactPerson,
        ContactEmail,
        ContactPhone,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000004_create_vendors_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_vendors_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vendors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vendors::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Vendors::Name).string().not_null())
                        .col(ColumnDef::new(Vendors::ContactPerson).string().null())
                        .col(ColumnDef::new(Vendors::Email).string().null())
                        .col(ColumnDef::new(Vendors::Phone).string().null())
                        .col(ColumnDef::new(Vendors::Address).text().null())
                        .col(ColumnDef::new(Vendors::Website).string().null())
                        .col(ColumnDef::new(Vendors::Notes).text().null())
                        .col(
                            ColumnDef::new(Vendors::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Vendors::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Vendors::UpdatedAt).timestamp().null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Vendors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Vendors {
        Table,
        Id,
        Name,
        ContactPerson,
        Email,
        Phone,
        Address,
        Website,
        Notes,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000005_create_assets_table {

    use super::m20240101_000001_create_users_table::Users;
    use super::m20240101_000002_create_asset_categories_table::AssetCategories;
    use super::m20240101_000003_create_locations_table::Locations;
    use super::m20240101_000004_create_vendors_table::Vendors;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_assets_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Assets::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Assets::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Assets::AssetTag)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Assets::Name).string().not_null())
                        .col(ColumnDef::new(Assets::Description).text().null())
                        .col(ColumnDef::new(Assets::CategoryId).big_integer().not_null())
                        .col(ColumnDef::new(Assets::Brand).string().null())
                        .col(ColumnDef::new(Assets::Model).string().null())
                        .col(ColumnDef::new(Assets::SerialNumber).string().null())
                        .col(
                            ColumnDef::new(Assets::Status)
                                .string()
                                .not_null()
                                .default("available"),
                        )
                        .col(
                            ColumnDef::new(Assets::Condition)
                                .string()
                                .not_null()
                                .default("good"),
                        )
                        .col(ColumnDef::new(Assets::LocationId).big_integer().not_null())
                        .col(ColumnDef::new(Assets::AssignedToId).big_integer().null())
                        .col(ColumnDef::new(Assets::VendorId).big_integer().null())
                        .col(ColumnDef::new(Assets::PurchaseDate).date().null())
                        .col(ColumnDef::new(Assets::PurchaseCost).decimal().null())
                        .col(ColumnDef::new(Assets::InvoiceNumber).string().null())
                        .col(ColumnDef::new(Assets::WarrantyStartDate).date().null())
                        .col(ColumnDef::new(Assets::WarrantyEndDate).date().null())
                        .col(ColumnDef::new(Assets::WarrantyProvider).string().null())
                        .col(ColumnDef::new(Assets::Notes).text().null())
                        .col(ColumnDef::new(Assets::QrCode).string().null())
                        .col(ColumnDef::new(Assets::CurrentValue).decimal().null())
                        .col(ColumnDef::new(Assets::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Assets::UpdatedAt).timestamp().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assets_category_id")
                                .from(Assets::Table, Assets::CategoryId)
                                .to(AssetCategories::Table, AssetCategories::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assets_location_id")
                                .from(Assets::Table, Assets::LocationId)
                                .to(Locations::Table, Locations::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assets_assigned_to_id")
                                .from(Assets::Table, Assets::AssignedToId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assets_vendor_id")
                                .from(Assets::Table, Assets::VendorId)
                                .to(Vendors::Table, Vendors::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_assets_status")
                        .table(Assets::Table)
                        .col(Assets::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_assets_category_id")
                        .table(Assets::Table)
                        .col(Assets::CategoryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_assets_location_id")
                        .table(Assets::Table)
                        .col(Assets::LocationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Assets::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Assets {
        Table,
        Id,
        AssetTag,
        Name,
        Description,
        CategoryId,
        Brand,
        Model,
        SerialNumber,
        Status,
        Condition,
        LocationId,
        AssignedToId,
        VendorId,
        PurchaseDate,
        PurchaseCost,
        InvoiceNumber,
        WarrantyStartDate,
        WarrantyEndDate,
        WarrantyProvider,
        Notes,
        QrCode,
        CurrentValue,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000006_create_asset_assignments_table {

    use super::m20240101_000001_create_users_table::Users;
    use super::m20240101_000005_create_assets_table::Assets;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_asset_assignments_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AssetAssignments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AssetAssignments::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetAssignments::AssetId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetAssignments::AssignedToId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetAssignments::AssignedById)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetAssignments::AssignedDate)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssetAssignments::ReturnDate)
                                .timestamp()
                                .null(),
                        )
                        .col(ColumnDef::new(AssetAssignments::Notes).text().null())
                        .col(
                            ColumnDef::new(AssetAssignments::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_asset_assignments_asset_id")
                                .from(AssetAssignments::Table, AssetAssignments::AssetId)
                                .to(Assets::Table, Assets::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_asset_assignments_assigned_to_id")
                                .from(AssetAssignments::Table, AssetAssignments::AssignedToId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_asset_assignments_assigned_by_id")
                                .from(AssetAssignments::Table, AssetAssignments::AssignedById)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_asset_assignments_asset_id")
                        .table(AssetAssignments::Table)
                        .col(AssetAssignments::AssetId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_asset_assignments_is_active")
                        .table(AssetAssignments::Table)
                        .col(AssetAssignments::IsActive)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AssetAssignments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum AssetAssignments {
        Table,
        Id,
        AssetId,
        AssignedToId,
        AssignedById,
        AssignedDate,
        ReturnDate,
        Notes,
        IsActive,
    }
}

mod m20240101_000007_create_maintenance_records_table {

    use super::m20240101_000001_create_users_table::Users;
    use super::m20240101_000004_create_vendors_table::Vendors;
    use super::m20240101_000005_create_assets_table::Assets;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_maintenance_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaintenanceRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaintenanceRecords::Id)
                                .big_integer()
                                .auto_increment()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::AssetId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::MaintenanceType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaintenanceRecords::Title).string().not_null())
                        .col(
                            ColumnDef::new(MaintenanceRecords::Description)
                                .text()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::ScheduledDate)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::CompletedDate)
                                .timestamp()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::Status)
                                .string()
                                .not_null()
                                .default("scheduled"),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::VendorId)
                                .big_integer()
                                .null(),
                        )
                        .col(ColumnDef::new(MaintenanceRecords::Cost).decimal().null())
                        .col(
                            ColumnDef::new(MaintenanceRecords::PerformedBy)
                                .string()
                                .null(),
                        )
                        .col(ColumnDef::new(MaintenanceRecords::Notes).text().null())
                        .col(
                            ColumnDef::new(MaintenanceRecords::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaintenanceRecords::CreatedById)
                                .big_integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_maintenance_records_asset_id")
                                .from(MaintenanceRecords::Table, MaintenanceRecords::AssetId)
                                .to(Assets::Table, Assets::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_maintenance_records_vendor_id")
                                .from(MaintenanceRecords::Table, MaintenanceRecords::VendorId)
                                .to(Vendors::Table, Vendors::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_maintenance_records_created_by_id")
                                .from(MaintenanceRecords::Table, MaintenanceRecords::CreatedById)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_maintenance_records_asset_id")
                        .table(MaintenanceRecords::Table)
                        .col(MaintenanceRecords::AssetId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_maintenance_records_status")
                        .table(MaintenanceRecords::Table)
                        .col(MaintenanceRecords::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_maintenance_records_scheduled_date")
                        .table(MaintenanceRecords::Table)
                        .col(MaintenanceRecords::ScheduledDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaintenanceRecords::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum MaintenanceRecords {
        Table,
        Id,
        AssetId,
        MaintenanceType,
        Title,
        Description,
        ScheduledDate,
        CompletedDate,
        Status,
        VendorId,
        Cost,
        PerformedBy,
        Notes,
        CreatedAt,
        CreatedById,
    }
}
