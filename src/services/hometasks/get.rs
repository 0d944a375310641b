use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HometaskService;
use crate::models::ApiResponse;
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    resolve_course_context, resolve_hometask_in_lecture, resolve_lecture_in_course,
};

pub async fn get_hometask(
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

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Hometask, Action::Retrieve) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    let hometask = match resolve_hometask_in_lecture(&storage, lecture_id, hometask_id).await {
        Ok(hometask) => hometask,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        hometask,
        "Hometask retrieved successfully",
    )))
}
