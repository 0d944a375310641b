//! 数据模型定义

pub mod auth;
pub mod comments;
pub mod common;
pub mod course_members;
pub mod courses;
pub mod hometasks;
pub mod homeworks;
pub mod lectures;
pub mod users;

pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;

// 业务错误码，作为 ApiResponse.code 返回给客户端
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 参数与校验
    BadRequest = 40000,
    UserNameInvalid = 40001,
    UserEmailInvalid = 40002,
    PasswordTooWeak = 40003,
    MarkExceedsMaximum = 40010,
    RosterRoleConflict = 40011,
    CommentNotAllowed = 40012,

    // 401xx 认证
    Unauthorized = 40100,
    InvalidToken = 40101,

    // 403xx 授权
    Forbidden = 40300,
    CoursePermissionDenied = 40301,

    // 404xx 资源
    NotFound = 40400,
    UserNotFound = 40401,
    CourseNotFound = 40402,
    LectureNotFound = 40403,
    HometaskNotFound = 40404,
    HomeworkNotFound = 40405,
    CommentNotFound = 40406,
    MarkNotSet = 40407,

    // 409xx 冲突
    UserNameAlreadyExists = 40901,
    UserEmailAlreadyExists = 40902,
    CourseSlugAlreadyExists = 40903,

    // 500xx 服务端
    InternalServerError = 50000,
    RegisterFailed = 50001,
}

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::CoursePermissionDenied as i32, 40301);
        assert_eq!(ErrorCode::MarkExceedsMaximum as i32, 40010);
    }
}
