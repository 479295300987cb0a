//! Create the `users` and `posts` tables from their entity definitions.

use sea_orm::Schema;
use sea_orm_migration::prelude::*;

use crate::infra::repositories::entities::{PostEntity, UserEntity};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // users first: posts carries the foreign key
        manager
            .create_table(
                schema
                    .create_table_from_entity(UserEntity)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(PostEntity)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostEntity).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserEntity).if_exists().to_owned())
            .await
    }
}
