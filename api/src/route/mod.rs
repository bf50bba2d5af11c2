pub mod auth;
pub mod health;
pub mod user;
pub mod v1;
