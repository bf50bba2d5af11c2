use crate::model::id::{PositionId, ScheduleId, SchedulePeriodId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct SchedulePeriod {
    pub period_id: SchedulePeriodId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl SchedulePeriod {
    // 開始・終了時刻ちょうどは期間外として扱う
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_time < at && at < self.end_time
    }
}

// あるユーザーの、あるスケジュール期間内での 1 ポジションへの割り当て
#[derive(Debug, Clone)]
pub struct Schedule {
    pub schedule_id: ScheduleId,
    pub user_id: UserId,
    pub position_id: PositionId,
    pub period_id: SchedulePeriodId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn period_is_active_only_inside_its_window() {
        let now = Utc::now();
        let period = SchedulePeriod {
            period_id: SchedulePeriodId::new(),
            start_time: now - Duration::days(7),
            end_time: now + Duration::days(7),
        };

        assert!(period.is_active_at(now));
        assert!(!period.is_active_at(now - Duration::days(8)));
        assert!(!period.is_active_at(now + Duration::days(8)));
        // 境界は含まない
        assert!(!period.is_active_at(period.start_time));
        assert!(!period.is_active_at(period.end_time));
    }
}
