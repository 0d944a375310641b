//! 请求上下文解析
//!
//! 嵌套路径下的每个操作都沿同一条路线展开：取当前用户、确认课程
//! 存在、解析名册身份、再沿父链逐级核对归属。任何一级缺失或不在
//! 声明的父级之下都按 404 处理，与权限判定相互独立。

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    comments::entities::Comment,
    courses::entities::Course,
    hometasks::entities::Hometask,
    homeworks::entities::Homework,
    lectures::entities::Lecture,
    users::entities::User,
};
use crate::permissions::CourseMembership;
use crate::storage::Storage;

/// 解析完成的课程上下文：当前用户、目标课程与名册身份
pub struct CourseContext {
    pub user: User,
    pub course: Course,
    pub membership: CourseMembership,
}

/// 统一的 500 响应
pub fn internal_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        message.into(),
    ))
}

/// 统一的 404 响应
pub fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 从请求扩展中取出当前用户，中间件缺席时返回 401
pub fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user identity",
        ))
    })
}

/// 解析课程上下文
///
/// 课程不存在 → 404；身份解析照常进行，成员与否交由调用方的权限
/// 判定决定（非成员访问真实课程应得到 403 而非空结果）。
pub async fn resolve_course_context(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
) -> Result<CourseContext, HttpResponse> {
    let user = current_user(request)?;

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Err(not_found(ErrorCode::CourseNotFound, "Course not found"));
        }
        Err(e) => {
            return Err(internal_error(format!("Failed to get course: {e}")));
        }
    };

    let membership = match CourseMembership::resolve(storage, user.id, course_id).await {
        Ok(membership) => membership,
        Err(e) => {
            return Err(internal_error(format!(
                "Failed to resolve course membership: {e}"
            )));
        }
    };

    Ok(CourseContext {
        user,
        course,
        membership,
    })
}

/// 核对讲义存在且属于路径中的课程
pub async fn resolve_lecture_in_course(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    lecture_id: i64,
) -> Result<Lecture, HttpResponse> {
    match storage.get_lecture_by_id(lecture_id).await {
        Ok(Some(lecture)) if lecture.course_id == course_id => Ok(lecture),
        Ok(_) => Err(not_found(ErrorCode::LectureNotFound, "Lecture not found")),
        Err(e) => Err(internal_error(format!("Failed to get lecture: {e}"))),
    }
}

/// 核对课后任务存在且属于路径中的讲义
pub async fn resolve_hometask_in_lecture(
    storage: &Arc<dyn Storage>,
    lecture_id: i64,
    hometask_id: i64,
) -> Result<Hometask, HttpResponse> {
    match storage.get_hometask_by_id(hometask_id).await {
        Ok(Some(hometask)) if hometask.lecture_id == lecture_id => Ok(hometask),
        Ok(_) => Err(not_found(ErrorCode::HometaskNotFound, "Hometask not found")),
        Err(e) => Err(internal_error(format!("Failed to get hometask: {e}"))),
    }
}

/// 核对作业提交存在且属于路径中的课后任务
pub async fn resolve_homework_in_hometask(
    storage: &Arc<dyn Storage>,
    hometask_id: i64,
    homework_id: i64,
) -> Result<Homework, HttpResponse> {
    match storage.get_homework_by_id(homework_id).await {
        Ok(Some(homework)) if homework.hometask_id == hometask_id => Ok(homework),
        Ok(_) => Err(not_found(ErrorCode::HomeworkNotFound, "Homework not found")),
        Err(e) => Err(internal_error(format!("Failed to get homework: {e}"))),
    }
}

/// 核对评论存在且属于路径中的作业
pub async fn resolve_comment_in_homework(
    storage: &Arc<dyn Storage>,
    homework_id: i64,
    comment_id: i64,
) -> Result<Comment, HttpResponse> {
    match storage.get_comment_by_id(comment_id).await {
        Ok(Some(comment)) if comment.homework_id == homework_id => Ok(comment),
        Ok(_) => Err(not_found(ErrorCode::CommentNotFound, "Comment not found")),
        Err(e) => Err(internal_error(format!("Failed to get comment: {e}"))),
    }
}
