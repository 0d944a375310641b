use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HomeworkService;
use crate::models::homeworks::requests::CreateHomeworkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    resolve_course_context, resolve_hometask_in_lecture, resolve_lecture_in_course,
};

// 提交者固定为当前用户，请求体无法指定他人；同一任务可重复提交
pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_data: CreateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::Create) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    if let Err(resp) = resolve_hometask_in_lecture(&storage, lecture_id, hometask_id).await {
        return Ok(resp);
    }

    if homework_data.file_token.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "file_token must not be empty",
        )));
    }

    match storage
        .create_homework(hometask_id, ctx.user.id, homework_data)
        .await
    {
        Ok(homework) => {
            info!(
                "Homework {} submitted for hometask {} by student {}",
                homework.id, hometask_id, ctx.user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                homework,
                "Homework submitted successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Homework submission failed: {e}"),
            )),
        ),
    }
}
