use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LectureService;
use crate::models::lectures::requests::CreateLectureRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;

// course_id 取自路径而非请求体，归属关系在创建时即固定
pub async fn create_lecture(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_data: CreateLectureRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Lecture, Action::Create) {
        return Ok(resp);
    }

    if lecture_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Lecture name must not be empty",
        )));
    }

    match storage.create_lecture(course_id, lecture_data).await {
        Ok(lecture) => {
            info!(
                "Lecture {} created in course {} by user {}",
                lecture.id, course_id, ctx.user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                lecture,
                "Lecture created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Lecture creation failed: {e}"),
            )),
        ),
    }
}
