use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Certificates::BatchCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Certificates::MineralType).string().not_null())
                    .col(
                        ColumnDef::new(Certificates::OriginDistrict)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::MineSite).string().not_null())
                    .col(ColumnDef::new(Certificates::ExportDate).date().not_null())
                    .col(ColumnDef::new(Certificates::WeightKg).double().null())
                    .col(
                        ColumnDef::new(Certificates::CertificationStatus)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Certificates::VerifiedByRema)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Certificates::IcglrCompliant)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Certificates::TamperHash).string().null())
                    .col(ColumnDef::new(Certificates::CompanyId).uuid().null())
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificates::Table, Certificates::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Certificates {
    Table,
    Id,
    BatchCode,
    MineralType,
    OriginDistrict,
    MineSite,
    ExportDate,
    WeightKg,
    CertificationStatus,
    VerifiedByRema,
    IcglrCompliant,
    TamperHash,
    CompanyId,
    CreatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
}
