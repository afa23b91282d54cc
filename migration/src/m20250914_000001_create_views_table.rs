use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Snowflakes are stored as signed 64-bit integers (bit-preserving cast from u64)
        manager
            .create_table(
                Table::create()
                    .table(Views::Table)
                    .if_not_exists()
                    .col(pk_auto(Views::Id))
                    .col(big_integer(Views::GuildId))
                    .col(big_integer(Views::ChannelId))
                    .col(big_integer(Views::MessageId))
                    .col(string(Views::ViewType).not_null())
                    .to_owned(),
            )
            .await?;

        // One live view of each type per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_views_guild_id_view_type")
                    .table(Views::Table)
                    .col(Views::GuildId)
                    .col(Views::ViewType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_views_guild_id")
                    .table(Views::Table)
                    .col(Views::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_views_guild_id")
                    .table(Views::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_views_guild_id_view_type")
                    .table(Views::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Views::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Views {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    ViewType,
}
