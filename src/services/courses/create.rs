use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::course_members::entities::CourseRole;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::current_user;
use crate::utils::validate::validate_slug;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    // 任何已认证用户都可以创建课程，无需课程内身份

    if course_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Course name must not be empty",
        )));
    }

    if let Err(msg) = validate_slug(&course_data.slug) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            msg,
        )));
    }

    // slug 唯一性预检，真正的唯一约束由数据库兜底
    match storage.get_course_by_slug(&course_data.slug).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CourseSlugAlreadyExists,
                "Course slug already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course slug: {e}"),
                )),
            );
        }
    }

    let course = match storage.create_course(course_data).await {
        Ok(course) => course,
        Err(e) => return Ok(handle_course_create_error(&e.to_string())),
    };

    // 创建者自动进入教师名册
    if let Err(e) = storage
        .add_course_member(course.id, user.id, CourseRole::Teacher)
        .await
    {
        error!(
            "Failed to add creator {} to teacher roster of course {}: {}",
            user.id, course.id, e
        );
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Course created but teacher roster update failed",
            )),
        );
    }

    info!("Course {} created by user {}", course.slug, user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course created successfully")))
}

/// 错误响应辅助函数
fn handle_course_create_error(e: &str) -> HttpResponse {
    let msg = format!("Course creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseSlugAlreadyExists,
            "Course slug already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
