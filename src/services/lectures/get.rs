use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LectureService;
use crate::models::ApiResponse;
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{resolve_course_context, resolve_lecture_in_course};

pub async fn get_lecture(
    service: &LectureService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Lecture, Action::Retrieve) {
        return Ok(resp);
    }

    let lecture = match resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        Ok(lecture) => lecture,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        lecture,
        "Lecture retrieved successfully",
    )))
}
