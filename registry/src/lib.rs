use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::schedule::ScheduleRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::schedule::ScheduleRepository;
use kernel::repository::user::UserRepository;
use kernel::service::colleague::ColleagueResolver;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    colleague_resolver: Arc<ColleagueResolver>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(pool.clone()));
        let schedule_repository: Arc<dyn ScheduleRepository> =
            Arc::new(ScheduleRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(redis_client.clone()));
        let colleague_resolver = Arc::new(ColleagueResolver::new(
            schedule_repository.clone(),
            user_repository.clone(),
        ));
        Self {
            health_check_repository,
            user_repository,
            schedule_repository,
            auth_repository,
            colleague_resolver,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn schedule_repository(&self) -> Arc<dyn ScheduleRepository> {
        self.schedule_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn colleague_resolver(&self) -> Arc<ColleagueResolver> {
        self.colleague_resolver.clone()
    }
}
