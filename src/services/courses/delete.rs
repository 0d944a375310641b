use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Course, Action::Delete) {
        return Ok(resp);
    }

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course {} deleted by user {}", course_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Course deletion failed: {e}"),
            )),
        ),
    }
}
