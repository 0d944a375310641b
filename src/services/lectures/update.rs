use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LectureService;
use crate::models::lectures::requests::UpdateLectureRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{resolve_course_context, resolve_lecture_in_course};

pub async fn update_lecture(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    update_data: UpdateLectureRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Lecture, Action::Update) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    match storage.update_lecture(lecture_id, update_data).await {
        Ok(Some(lecture)) => {
            info!("Lecture {} updated by user {}", lecture_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                lecture,
                "Lecture updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Lecture not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Lecture update failed: {e}"),
            )),
        ),
    }
}
