pub mod auth;
pub mod comments;
pub mod courses;
pub mod hometasks;
pub mod homeworks;
pub mod lectures;

pub use auth::configure_auth_routes;
pub use comments::configure_comment_routes;
pub use courses::configure_course_routes;
pub use hometasks::configure_hometask_routes;
pub use homeworks::configure_homework_routes;
pub use lectures::configure_lecture_routes;
