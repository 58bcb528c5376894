use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(
                        ColumnDef::new(Companies::RegistrationNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Companies::ContactEmail).string().null())
                    .col(ColumnDef::new(Companies::ContactPhone).string().null())
                    .col(ColumnDef::new(Companies::Address).string().null())
                    .col(ColumnDef::new(Companies::MineLocationLat).double().null())
                    .col(ColumnDef::new(Companies::MineLocationLng).double().null())
                    .col(
                        ColumnDef::new(Companies::CertificationStatus)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Companies::CertificationStartDate).date().null())
                    .col(ColumnDef::new(Companies::CertificationEndDate).date().null())
                    .col(
                        ColumnDef::new(Companies::RegionalCompliance)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Companies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Companies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
    Name,
    RegistrationNumber,
    ContactEmail,
    ContactPhone,
    Address,
    MineLocationLat,
    MineLocationLng,
    CertificationStatus,
    CertificationStartDate,
    CertificationEndDate,
    RegionalCompliance,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
