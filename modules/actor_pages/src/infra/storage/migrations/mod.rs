//! Database migrations for actor pages

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_actor_pages::Migration)]
    }
}

mod m20250601_000001_create_actor_pages {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ActorPages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ActorPages::Slug)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ActorPages::OwnerId).string())
                        .col(
                            ColumnDef::new(ActorPages::Tier)
                                .string()
                                .not_null()
                                .default("free"),
                        )
                        .col(ColumnDef::new(ActorPages::TemplateId).string().not_null())
                        .col(ColumnDef::new(ActorPages::Config).json().not_null())
                        .col(
                            ColumnDef::new(ActorPages::IsPublished)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(ActorPages::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(ActorPages::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_actor_pages_owner")
                        .table(ActorPages::Table)
                        .col(ActorPages::OwnerId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ActorPages::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ActorPages {
        Table,
        Slug,
        OwnerId,
        Tier,
        TemplateId,
        Config,
        IsPublished,
        CreatedAt,
        UpdatedAt,
    }
}
