use sea_orm::entity::prelude::*;

/// One persisted ledger entry. Derived categories are stored verbatim as
/// recorded; readers never re-classify historical rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recorded_points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub match_id: Uuid,
    pub sequence_id: i32,
    pub action_id: String,
    pub sub_tag_id: Option<String>,
    pub sub_sub_tag_id: Option<String>,
    pub position: String,
    pub team: String,
    pub category1: String,
    pub category2: String,
    pub recorded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
