use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HometaskService;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    resolve_course_context, resolve_hometask_in_lecture, resolve_lecture_in_course,
};

pub async fn delete_hometask(
    service: &HometaskService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Hometask, Action::Delete) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    if let Err(resp) = resolve_hometask_in_lecture(&storage, lecture_id, hometask_id).await {
        return Ok(resp);
    }

    match storage.delete_hometask(hometask_id).await {
        Ok(true) => {
            info!("Hometask {} deleted by user {}", hometask_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Hometask deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::HometaskNotFound,
            "Hometask not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Hometask deletion failed: {e}"),
            )),
        ),
    }
}
