//! Create `bookmark` table with FK to `account`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookmark::Table)
                    .if_not_exists()
                    .col(big_integer(Bookmark::Id).auto_increment().primary_key())
                    .col(big_integer(Bookmark::AccountId).not_null())
                    .col(string_len(Bookmark::Title, 255).not_null())
                    .col(
                        ColumnDef::new(Bookmark::Description)
                            .text()
                            .null(),
                    )
                    .col(text(Bookmark::Link).not_null())
                    .col(timestamp_with_time_zone(Bookmark::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Bookmark::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookmark_account")
                            .from(Bookmark::Table, Bookmark::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookmark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookmark { Table, Id, AccountId, Title, Description, Link, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Account { Table, Id }
