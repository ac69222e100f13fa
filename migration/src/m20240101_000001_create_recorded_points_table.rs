use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecordedPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecordedPoints::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecordedPoints::MatchId).uuid().not_null())
                    .col(
                        ColumnDef::new(RecordedPoints::SequenceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedPoints::ActionId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RecordedPoints::SubTagId).string())
                    .col(ColumnDef::new(RecordedPoints::SubSubTagId).string())
                    .col(
                        ColumnDef::new(RecordedPoints::Position)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RecordedPoints::Team).string().not_null())
                    .col(
                        ColumnDef::new(RecordedPoints::Category1)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedPoints::Category2)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedPoints::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Two writers racing past the per-match serialization boundary would
        // allocate the same sequence id; the unique index turns that into a
        // surfaced conflict instead of a silent duplicate.
        manager
            .create_index(
                Index::create()
                    .name("idx_recorded_points_match_sequence")
                    .table(RecordedPoints::Table)
                    .col(RecordedPoints::MatchId)
                    .col(RecordedPoints::SequenceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecordedPoints::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RecordedPoints {
    Table,
    Id,
    MatchId,
    SequenceId,
    ActionId,
    SubTagId,
    SubSubTagId,
    Position,
    Team,
    Category1,
    Category2,
    RecordedAt,
}
