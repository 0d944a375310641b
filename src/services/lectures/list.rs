use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LectureService;
use crate::models::lectures::requests::LectureListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;

pub async fn list_lectures(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    query: LectureListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Lecture, Action::List) {
        return Ok(resp);
    }

    match storage.list_lectures(course_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Lectures retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list lectures: {e}"),
            )),
        ),
    }
}
