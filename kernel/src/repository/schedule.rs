use crate::model::{
    id::{PositionId, SchedulePeriodId, UserId},
    position::Position,
    schedule::{Schedule, SchedulePeriod},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // now を含むスケジュール期間（start_time < now < end_time）をすべて取得する
    async fn find_active_periods(&self, now: DateTime<Utc>) -> AppResult<Vec<SchedulePeriod>>;
    // 指定期間内のユーザーの割り当てを取得する。
    // 複数存在する場合は最初の 1 件のみを正とする
    async fn find_schedule(
        &self,
        user_id: UserId,
        period_id: SchedulePeriodId,
    ) -> AppResult<Option<Schedule>>;
    // 指定期間・指定ポジションの割り当てをすべて取得する
    async fn find_schedules(
        &self,
        period_id: SchedulePeriodId,
        position_id: PositionId,
    ) -> AppResult<Vec<Schedule>>;
    // ユーザーがこれまでに割り当てられたポジションの一覧を取得する
    async fn find_positions_by_user(&self, user_id: UserId) -> AppResult<Vec<Position>>;
}
