use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HometaskService;
use crate::models::hometasks::requests::CreateHometaskRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{resolve_course_context, resolve_lecture_in_course};

pub async fn create_hometask(
    service: &HometaskService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_data: CreateHometaskRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Hometask, Action::Create) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    if hometask_data.max_mark <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "max_mark must be a positive integer",
        )));
    }

    match storage.create_hometask(lecture_id, hometask_data).await {
        Ok(hometask) => {
            info!(
                "Hometask {} created in lecture {} by user {}",
                hometask.id, lecture_id, ctx.user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                hometask,
                "Hometask created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Hometask creation failed: {e}"),
            )),
        ),
    }
}
