use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Users::UserName, 255))
                    .col(string_len(Users::FirstName, 255))
                    .col(string_len(Users::LastName, 255))
                    .col(string_len(Users::Email, 255))
                    .col(
                        ColumnDef::new(Users::UserStatus)
                            .string_len(1)
                            .not_null()
                            .check(Expr::cust("user_status IN ('A', 'I', 'T')")),
                    )
                    .col(ColumnDef::new(Users::Department).string_len(255).null())
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique indexes back the application-level uniqueness pre-checks.
        // The index names are matched by the repository when a concurrent
        // write loses the check-then-act race.
        for (name, column) in [
            ("uq_users_user_name", Users::UserName),
            ("uq_users_email", Users::Email),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Users::Table)
                        .col(column)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    UserName,
    FirstName,
    LastName,
    Email,
    UserStatus,
    Department,
    CreatedAt,
    UpdatedAt,
}
