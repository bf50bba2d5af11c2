pub mod auth;
pub mod id;
pub mod position;
pub mod role;
pub mod schedule;
pub mod user;
