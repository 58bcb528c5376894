use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedbackReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedbackReports::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeedbackReports::UserId).uuid().null())
                    .col(ColumnDef::new(FeedbackReports::Name).string().not_null())
                    .col(ColumnDef::new(FeedbackReports::Email).string().not_null())
                    .col(ColumnDef::new(FeedbackReports::Location).string().not_null())
                    .col(ColumnDef::new(FeedbackReports::Category).string().not_null())
                    .col(ColumnDef::new(FeedbackReports::Message).text().not_null())
                    .col(
                        ColumnDef::new(FeedbackReports::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(FeedbackReports::AdminResponse).text().null())
                    .col(ColumnDef::new(FeedbackReports::AdminId).uuid().null())
                    .col(
                        ColumnDef::new(FeedbackReports::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FeedbackReports::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeedbackReports::Table, FeedbackReports::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FeedbackReports::Table)
                    .col(FeedbackReports::UserId)
                    .col(FeedbackReports::CreatedAt)
                    .name("idx_feedback_reports_user_id_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackReports::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FeedbackReports {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Location,
    Category,
    Message,
    Status,
    AdminResponse,
    AdminId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
}
