use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoleAssignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // At most one assignment per user; concurrent first-time
                    // assignments for the same user lose here, not silently.
                    .col(
                        ColumnDef::new(RoleAssignments::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RoleAssignments::Role).string().not_null())
                    .col(
                        ColumnDef::new(RoleAssignments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RoleAssignments::UpdatedAt)
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
            .drop_table(Table::drop().table(RoleAssignments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RoleAssignments {
    Table,
    Id,
    UserId,
    Role,
    CreatedAt,
    UpdatedAt,
}
