use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;

// slug 与名册不在更新请求模型中，反序列化阶段就会丢弃请求体里的
// 同名字段，层级归属字段的不可变性由请求模型的形状保证。
pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Course, Action::Update) {
        return Ok(resp);
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated by user {}", course_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                course,
                "Course updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Course update failed: {e}"),
            )),
        ),
    }
}
