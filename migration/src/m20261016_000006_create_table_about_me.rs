use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboutMe::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutMe::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(AboutMe::Slot).small_integer().not_null().default(1))
                    .col(ColumnDef::new(AboutMe::Name).text().not_null())
                    .col(ColumnDef::new(AboutMe::Title).text().not_null())
                    .col(ColumnDef::new(AboutMe::Bio).text().not_null())
                    .col(
                        ColumnDef::new(AboutMe::PictureUrl)
                            .text()
                            .not_null()
                            .default("/placeholder.svg"),
                    )
                    .col(
                        ColumnDef::new(AboutMe::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AboutMe::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one row.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_about_me_slot_unique
                ON about_me (slot);
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
                DROP INDEX IF EXISTS idx_about_me_slot_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AboutMe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutMe {
    #[sea_orm(iden = "about_me")]
    Table,
    Id,
    Slot,
    Name,
    Title,
    Bio,
    PictureUrl,
    CreatedAt,
    UpdatedAt,
}
