//! SeaORM 数据库实体定义

pub mod comments;
pub mod course_members;
pub mod courses;
pub mod hometasks;
pub mod homeworks;
pub mod lectures;
pub mod prelude;
pub mod users;
