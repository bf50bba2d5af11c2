use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    id::{PositionId, SchedulePeriodId, UserId},
    position::Position,
    schedule::{Schedule, SchedulePeriod},
};
use kernel::repository::schedule::ScheduleRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::schedule::{PositionRow, SchedulePeriodRow, ScheduleRow},
    ConnectionPool,
};

#[derive(new)]
pub struct ScheduleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    // now を含むスケジュール期間をすべて取得する。境界は期間に含まない
    async fn find_active_periods(&self, now: DateTime<Utc>) -> AppResult<Vec<SchedulePeriod>> {
        let rows: Vec<SchedulePeriodRow> = sqlx::query_as(
            r#"
                SELECT period_id, start_time, end_time
                FROM schedule_periods
                WHERE start_time < $1 AND end_time > $1
                ORDER BY start_time ASC
                ;
            "#,
        )
        .bind(now)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(SchedulePeriod::from).collect())
    }

    // 同一期間に複数の割り当てが残っていても最初の 1 件のみを正とする
    async fn find_schedule(
        &self,
        user_id: UserId,
        period_id: SchedulePeriodId,
    ) -> AppResult<Option<Schedule>> {
        let row: Option<ScheduleRow> = sqlx::query_as(
            r#"
                SELECT schedule_id, user_id, position_id, period_id
                FROM schedules
                WHERE user_id = $1 AND period_id = $2
                ORDER BY schedule_id ASC
                LIMIT 1
                ;
            "#,
        )
        .bind(user_id)
        .bind(period_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Schedule::from))
    }

    async fn find_schedules(
        &self,
        period_id: SchedulePeriodId,
        position_id: PositionId,
    ) -> AppResult<Vec<Schedule>> {
        let rows: Vec<ScheduleRow> = sqlx::query_as(
            r#"
                SELECT schedule_id, user_id, position_id, period_id
                FROM schedules
                WHERE period_id = $1 AND position_id = $2
                ORDER BY schedule_id ASC
                ;
            "#,
        )
        .bind(period_id)
        .bind(position_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Schedule::from).collect())
    }

    async fn find_positions_by_user(&self, user_id: UserId) -> AppResult<Vec<Position>> {
        let rows: Vec<PositionRow> = sqlx::query_as(
            r#"
                SELECT DISTINCT p.position_id, p.name
                FROM positions AS p
                INNER JOIN schedules AS s ON p.position_id = s.position_id
                WHERE s.user_id = $1
                ORDER BY p.name ASC
                ;
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Position::from).collect())
    }
}
