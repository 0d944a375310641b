use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HometaskService;
use crate::models::hometasks::requests::HometaskListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{resolve_course_context, resolve_lecture_in_course};

pub async fn list_hometasks(
    service: &HometaskService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    query: HometaskListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Hometask, Action::List) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    match storage.list_hometasks(lecture_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Hometasks retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list hometasks: {e}"),
            )),
        ),
    }
}
