use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialMedia::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialMedia::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SocialMedia::Platform).text().not_null())
                    .col(ColumnDef::new(SocialMedia::Url).text().not_null())
                    .col(ColumnDef::new(SocialMedia::Order).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(SocialMedia::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SocialMedia::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_social_media_order
                ON social_media ("order");
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_social_media_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialMedia::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocialMedia {
    #[sea_orm(iden = "social_media")]
    Table,
    Id,
    Platform,
    Url,
    Order,
    CreatedAt,
    UpdatedAt,
}
