use anyhow::{anyhow, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::entities::{prelude::*, recorded_points};
use match_types::{MatchId, OutcomeCategory, PointOutcome, Position, RecordedPoint, Team};

pub struct PointRepository {
    db: DatabaseConnection,
}

impl PointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_point(model: recorded_points::Model) -> Result<RecordedPoint> {
        Ok(RecordedPoint {
            sequence_id: model.sequence_id as u32,
            match_id: model.match_id,
            action_id: model.action_id,
            sub_tag_id: model.sub_tag_id,
            sub_sub_tag_id: model.sub_sub_tag_id,
            position: parse_position(&model.position)?,
            team: parse_team(&model.team)?,
            category1: parse_outcome(&model.category1)?,
            category2: parse_category(&model.category2)?,
            timestamp: model.recorded_at.to_rfc3339(),
        })
    }

    pub async fn insert_point(&self, point: &RecordedPoint) -> Result<()> {
        let recorded_at = chrono::DateTime::parse_from_rfc3339(&point.timestamp)
            .unwrap_or_else(|_| chrono::Utc::now().into());

        let model = recorded_points::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            match_id: sea_orm::ActiveValue::Set(point.match_id),
            sequence_id: sea_orm::ActiveValue::Set(point.sequence_id as i32),
            action_id: sea_orm::ActiveValue::Set(point.action_id.clone()),
            sub_tag_id: sea_orm::ActiveValue::Set(point.sub_tag_id.clone()),
            sub_sub_tag_id: sea_orm::ActiveValue::Set(point.sub_sub_tag_id.clone()),
            position: sea_orm::ActiveValue::Set(position_str(point.position).to_string()),
            team: sea_orm::ActiveValue::Set(team_str(point.team).to_string()),
            category1: sea_orm::ActiveValue::Set(outcome_str(point.category1).to_string()),
            category2: sea_orm::ActiveValue::Set(category_str(point.category2).to_string()),
            recorded_at: sea_orm::ActiveValue::Set(recorded_at),
        };

        RecordedPoints::insert(model).exec(&self.db).await?;
        Ok(())
    }

    /// All points for a match, ascending by sequence id.
    pub async fn list_for_match(&self, match_id: MatchId) -> Result<Vec<RecordedPoint>> {
        let models = RecordedPoints::find()
            .filter(recorded_points::Column::MatchId.eq(match_id))
            .order_by_asc(recorded_points::Column::SequenceId)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::model_to_point).collect()
    }

    pub async fn max_sequence(&self, match_id: MatchId) -> Result<Option<u32>> {
        let model = RecordedPoints::find()
            .filter(recorded_points::Column::MatchId.eq(match_id))
            .order_by_desc(recorded_points::Column::SequenceId)
            .limit(1)
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.sequence_id as u32))
    }

    /// Delete one point. Returns whether a row was removed.
    pub async fn delete_point(&self, match_id: MatchId, sequence_id: u32) -> Result<bool> {
        let result = RecordedPoints::delete_many()
            .filter(recorded_points::Column::MatchId.eq(match_id))
            .filter(recorded_points::Column::SequenceId.eq(sequence_id as i32))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Drop every point of a match when its analysis is deleted.
    pub async fn delete_for_match(&self, match_id: MatchId) -> Result<u64> {
        let result = RecordedPoints::delete_many()
            .filter(recorded_points::Column::MatchId.eq(match_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn position_str(position: Position) -> &'static str {
    match position {
        Position::Left => "left",
        Position::Right => "right",
    }
}

fn parse_position(value: &str) -> Result<Position> {
    match value {
        "left" => Ok(Position::Left),
        "right" => Ok(Position::Right),
        other => Err(anyhow!("unrecognized position value: {other}")),
    }
}

fn team_str(team: Team) -> &'static str {
    match team {
        Team::Home => "home",
        Team::Away => "away",
    }
}

fn parse_team(value: &str) -> Result<Team> {
    match value {
        "home" => Ok(Team::Home),
        "away" => Ok(Team::Away),
        other => Err(anyhow!("unrecognized team value: {other}")),
    }
}

fn outcome_str(outcome: PointOutcome) -> &'static str {
    match outcome {
        PointOutcome::Won => "won",
        PointOutcome::Lost => "lost",
    }
}

fn parse_outcome(value: &str) -> Result<PointOutcome> {
    match value {
        "won" => Ok(PointOutcome::Won),
        "lost" => Ok(PointOutcome::Lost),
        other => Err(anyhow!("unrecognized outcome value: {other}")),
    }
}

fn category_str(category: OutcomeCategory) -> &'static str {
    match category {
        OutcomeCategory::Winner => "winner",
        OutcomeCategory::UnforcedError => "unforced_error",
        OutcomeCategory::ForcedError => "forced_error",
        OutcomeCategory::OpponentFault => "opponent_fault",
        OutcomeCategory::None => "none",
    }
}

fn parse_category(value: &str) -> Result<OutcomeCategory> {
    match value {
        "winner" => Ok(OutcomeCategory::Winner),
        "unforced_error" => Ok(OutcomeCategory::UnforcedError),
        "forced_error" => Ok(OutcomeCategory::ForcedError),
        "opponent_fault" => Ok(OutcomeCategory::OpponentFault),
        "none" => Ok(OutcomeCategory::None),
        other => Err(anyhow!("unrecognized category value: {other}")),
    }
}
