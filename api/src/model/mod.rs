pub mod position;
pub mod user;
