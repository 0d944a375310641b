pub mod auth;
pub mod comments;
pub mod context;
pub mod courses;
pub mod hometasks;
pub mod homeworks;
pub mod lectures;
pub mod notifications;
pub mod rosters;

pub use auth::AuthService;
pub use comments::CommentService;
pub use courses::CourseService;
pub use hometasks::HometaskService;
pub use homeworks::HomeworkService;
pub use lectures::LectureService;
pub use rosters::RosterService;
