use kernel::model::{
    id::{PositionId, ScheduleId, SchedulePeriodId, UserId},
    position::Position,
    schedule::{Schedule, SchedulePeriod},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct SchedulePeriodRow {
    pub period_id: SchedulePeriodId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<SchedulePeriodRow> for SchedulePeriod {
    fn from(value: SchedulePeriodRow) -> Self {
        let SchedulePeriodRow {
            period_id,
            start_time,
            end_time,
        } = value;
        SchedulePeriod {
            period_id,
            start_time,
            end_time,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct ScheduleRow {
    pub schedule_id: ScheduleId,
    pub user_id: UserId,
    pub position_id: PositionId,
    pub period_id: SchedulePeriodId,
}

impl From<ScheduleRow> for Schedule {
    fn from(value: ScheduleRow) -> Self {
        let ScheduleRow {
            schedule_id,
            user_id,
            position_id,
            period_id,
        } = value;
        Schedule {
            schedule_id,
            user_id,
            position_id,
            period_id,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct PositionRow {
    pub position_id: PositionId,
    pub name: String,
}

impl From<PositionRow> for Position {
    fn from(value: PositionRow) -> Self {
        let PositionRow { position_id, name } = value;
        Position { position_id, name }
    }
}
