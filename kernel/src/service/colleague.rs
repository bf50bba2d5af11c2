use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    id::{PositionId, SchedulePeriodId, UserId},
    user::User,
};
use crate::repository::{schedule::ScheduleRepository, user::UserRepository};

// 「同僚」= 現在有効なスケジュール期間内で、本人と同じポジションに
// 割り当てられている他のユーザー
#[derive(new)]
pub struct ColleagueResolver {
    schedule_repository: Arc<dyn ScheduleRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl ColleagueResolver {
    pub async fn resolve(&self, user_id: UserId) -> AppResult<Vec<User>> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("ユーザー（{user_id}）が見つかりませんでした。"))
            })?;

        let periods = self
            .schedule_repository
            .find_active_periods(Utc::now())
            .await?;

        // 有効期間ごとに本人の割り当てポジションを集める。
        // 割り当てが無い期間はエラーではないので読み飛ばす
        let mut assignments: Vec<(SchedulePeriodId, PositionId)> = Vec::new();
        for period in &periods {
            if let Some(schedule) = self
                .schedule_repository
                .find_schedule(user_id, period.period_id)
                .await?
            {
                assignments.push((period.period_id, schedule.position_id));
            }
        }

        // 期間・ポジションを共有する割り当てから本人を除いてユーザーを集める。
        // 複数の期間で重なる相手は 1 回だけ数える
        let mut seen = HashSet::new();
        let mut colleagues = Vec::new();
        for (period_id, position_id) in assignments {
            for schedule in self
                .schedule_repository
                .find_schedules(period_id, position_id)
                .await?
            {
                if schedule.user_id == user.user_id || !seen.insert(schedule.user_id) {
                    continue;
                }
                // 割り当てだけが残った削除済みユーザーは結果に含めない
                if let Some(colleague) =
                    self.user_repository.find_by_id(schedule.user_id).await?
                {
                    colleagues.push(colleague);
                }
            }
        }

        Ok(colleagues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::role::Role;
    use crate::model::schedule::{Schedule, SchedulePeriod};
    use crate::model::user::event::{
        CreateUser, DeleteUser, UpdateUser, UpdateUserProfile, UpdateUserRole,
    };
    use crate::model::{id::ScheduleId, position::Position};
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use std::collections::HashMap;

    struct InMemoryUserRepository {
        users: HashMap<UserId, User>,
    }

    impl InMemoryUserRepository {
        fn with(users: &[User]) -> Self {
            Self {
                users: users.iter().map(|u| (u.user_id, u.clone())).collect(),
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, _event: CreateUser) -> AppResult<User> {
            unimplemented!()
        }
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Ok(self.users.values().cloned().collect())
        }
        async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
            Ok(self.users.get(&user_id).cloned())
        }
        async fn update(&self, _event: UpdateUser) -> AppResult<()> {
            unimplemented!()
        }
        async fn update_profile(&self, _event: UpdateUserProfile) -> AppResult<()> {
            unimplemented!()
        }
        async fn update_role(&self, _event: UpdateUserRole) -> AppResult<()> {
            unimplemented!()
        }
        async fn delete(&self, _event: DeleteUser) -> AppResult<()> {
            unimplemented!()
        }
        async fn find_supervisors(&self, _user_id: UserId) -> AppResult<Vec<User>> {
            Ok(vec![])
        }
        async fn find_employees(&self, _user_id: UserId) -> AppResult<Vec<User>> {
            Ok(vec![])
        }
    }

    struct InMemoryScheduleRepository {
        periods: Vec<SchedulePeriod>,
        schedules: Vec<Schedule>,
    }

    #[async_trait]
    impl ScheduleRepository for InMemoryScheduleRepository {
        async fn find_active_periods(
            &self,
            now: DateTime<Utc>,
        ) -> AppResult<Vec<SchedulePeriod>> {
            Ok(self
                .periods
                .iter()
                .filter(|p| p.is_active_at(now))
                .cloned()
                .collect())
        }
        async fn find_schedule(
            &self,
            user_id: UserId,
            period_id: SchedulePeriodId,
        ) -> AppResult<Option<Schedule>> {
            Ok(self
                .schedules
                .iter()
                .find(|s| s.user_id == user_id && s.period_id == period_id)
                .cloned())
        }
        async fn find_schedules(
            &self,
            period_id: SchedulePeriodId,
            position_id: PositionId,
        ) -> AppResult<Vec<Schedule>> {
            Ok(self
                .schedules
                .iter()
                .filter(|s| s.period_id == period_id && s.position_id == position_id)
                .cloned()
                .collect())
        }
        async fn find_positions_by_user(&self, _user_id: UserId) -> AppResult<Vec<Position>> {
            Ok(vec![])
        }
    }

    fn user(name: &str) -> User {
        User {
            user_id: UserId::new(),
            user_name: name.to_string(),
            email: format!("{name}@example.com"),
            role: Role::User,
            is_active: true,
        }
    }

    fn active_period() -> SchedulePeriod {
        let now = Utc::now();
        SchedulePeriod {
            period_id: SchedulePeriodId::new(),
            start_time: now - Duration::days(7),
            end_time: now + Duration::days(7),
        }
    }

    fn expired_period() -> SchedulePeriod {
        let now = Utc::now();
        SchedulePeriod {
            period_id: SchedulePeriodId::new(),
            start_time: now - Duration::days(30),
            end_time: now - Duration::days(14),
        }
    }

    fn assignment(user: &User, period: &SchedulePeriod, position_id: PositionId) -> Schedule {
        Schedule {
            schedule_id: ScheduleId::new(),
            user_id: user.user_id,
            position_id,
            period_id: period.period_id,
        }
    }

    fn resolver(
        periods: Vec<SchedulePeriod>,
        schedules: Vec<Schedule>,
        users: &[User],
    ) -> ColleagueResolver {
        ColleagueResolver::new(
            Arc::new(InMemoryScheduleRepository { periods, schedules }),
            Arc::new(InMemoryUserRepository::with(users)),
        )
    }

    fn id_set(users: &[User]) -> HashSet<UserId> {
        users.iter().map(|u| u.user_id).collect()
    }

    #[tokio::test]
    async fn unknown_user_is_a_not_found_error() {
        let resolver = resolver(vec![], vec![], &[]);

        let result = resolver.resolve(UserId::new()).await;
        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn user_without_active_assignment_has_no_colleagues() {
        let alice = user("alice");
        let bob = user("bob");
        let period = active_period();
        let position_id = PositionId::new();

        // 割り当てがあるのは bob だけ
        let schedules = vec![assignment(&bob, &period, position_id)];
        let resolver = resolver(vec![period], schedules, &[alice.clone(), bob]);

        let colleagues = resolver.resolve(alice.user_id).await.unwrap();
        assert!(colleagues.is_empty());
    }

    #[tokio::test]
    async fn assignment_in_expired_period_does_not_count() {
        let alice = user("alice");
        let bob = user("bob");
        let period = expired_period();
        let position_id = PositionId::new();

        let schedules = vec![
            assignment(&alice, &period, position_id),
            assignment(&bob, &period, position_id),
        ];
        let resolver = resolver(vec![period], schedules, &[alice.clone(), bob]);

        let colleagues = resolver.resolve(alice.user_id).await.unwrap();
        assert!(colleagues.is_empty());
    }

    #[tokio::test]
    async fn colleagues_share_position_and_period_and_exclude_self() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let dave = user("dave");
        let period = active_period();
        let front_desk = PositionId::new();
        let kitchen = PositionId::new();

        let schedules = vec![
            assignment(&alice, &period, front_desk),
            assignment(&bob, &period, front_desk),
            assignment(&carol, &period, front_desk),
            // 別ポジションのユーザーは同僚ではない
            assignment(&dave, &period, kitchen),
        ];
        let resolver = resolver(
            vec![period],
            schedules,
            &[alice.clone(), bob.clone(), carol.clone(), dave],
        );

        let colleagues = resolver.resolve(alice.user_id).await.unwrap();
        assert_eq!(colleagues.len(), 2);
        assert_eq!(id_set(&colleagues), id_set(&[bob, carol]));
        assert!(!id_set(&colleagues).contains(&alice.user_id));
    }

    #[tokio::test]
    async fn colleague_shared_in_two_periods_is_listed_once() {
        let alice = user("alice");
        let bob = user("bob");
        let first = active_period();
        let second = active_period();
        let position_id = PositionId::new();

        let schedules = vec![
            assignment(&alice, &first, position_id),
            assignment(&bob, &first, position_id),
            assignment(&alice, &second, position_id),
            assignment(&bob, &second, position_id),
        ];
        let resolver = resolver(
            vec![first, second],
            schedules,
            &[alice.clone(), bob.clone()],
        );

        let colleagues = resolver.resolve(alice.user_id).await.unwrap();
        assert_eq!(colleagues.len(), 1);
        assert_eq!(colleagues[0].user_id, bob.user_id);
    }

    #[tokio::test]
    async fn result_set_does_not_depend_on_period_ordering() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let first = active_period();
        let second = active_period();
        let front_desk = PositionId::new();
        let kitchen = PositionId::new();

        // alice は期間ごとに別ポジションで勤務する
        let schedules = vec![
            assignment(&alice, &first, front_desk),
            assignment(&bob, &first, front_desk),
            assignment(&alice, &second, kitchen),
            assignment(&carol, &second, kitchen),
        ];
        let users = [alice.clone(), bob.clone(), carol.clone()];

        let forward = resolver(
            vec![first.clone(), second.clone()],
            schedules.clone(),
            &users,
        );
        let backward = resolver(vec![second, first], schedules, &users);

        let a = forward.resolve(alice.user_id).await.unwrap();
        let b = backward.resolve(alice.user_id).await.unwrap();
        assert_eq!(id_set(&a), id_set(&b));
        assert_eq!(id_set(&a), id_set(&[bob, carol]));
    }

    #[tokio::test]
    async fn first_assignment_in_a_period_is_authoritative() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let period = active_period();
        let front_desk = PositionId::new();
        let kitchen = PositionId::new();

        // 同一期間に本人の割り当てが重複して残っているケース。
        // 最初の 1 件（front_desk）のみを正とし、2 件目のポジションの
        // 同僚は結果に含まれない
        let schedules = vec![
            assignment(&alice, &period, front_desk),
            assignment(&alice, &period, kitchen),
            assignment(&bob, &period, front_desk),
            assignment(&carol, &period, kitchen),
        ];
        let resolver = resolver(
            vec![period],
            schedules,
            &[alice.clone(), bob.clone(), carol],
        );

        let colleagues = resolver.resolve(alice.user_id).await.unwrap();
        assert_eq!(colleagues.len(), 1);
        assert_eq!(colleagues[0].user_id, bob.user_id);
    }

    #[tokio::test]
    async fn dangling_assignment_of_deleted_user_is_skipped() {
        let alice = user("alice");
        let ghost = user("ghost");
        let period = active_period();
        let position_id = PositionId::new();

        let schedules = vec![
            assignment(&alice, &period, position_id),
            assignment(&ghost, &period, position_id),
        ];
        // ghost はユーザーテーブルに存在しない
        let resolver = resolver(vec![period], schedules, &[alice.clone()]);

        let colleagues = resolver.resolve(alice.user_id).await.unwrap();
        assert!(colleagues.is_empty());
    }
}
