pub use super::comments::Entity as Comments;
pub use super::course_members::Entity as CourseMembers;
pub use super::courses::Entity as Courses;
pub use super::hometasks::Entity as Hometasks;
pub use super::homeworks::Entity as Homeworks;
pub use super::lectures::Entity as Lectures;
pub use super::users::Entity as Users;
