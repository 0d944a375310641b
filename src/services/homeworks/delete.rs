use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HomeworkService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    not_found, resolve_course_context, resolve_homework_in_hometask,
    resolve_hometask_in_lecture, resolve_lecture_in_course,
};

// 默认只有提交者本人可以删除；teacher_can_delete_homework 策略开启
// 时教师同样获准
pub async fn delete_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let policy = &AppConfig::get().policy;

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    let teacher_allowed = policy.teacher_can_delete_homework && ctx.membership.is_teacher;

    if !teacher_allowed
        && let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::Delete)
    {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    if let Err(resp) = resolve_hometask_in_lecture(&storage, lecture_id, hometask_id).await {
        return Ok(resp);
    }

    let homework = match resolve_homework_in_hometask(&storage, hometask_id, homework_id).await {
        Ok(homework) => homework,
        Err(resp) => return Ok(resp),
    };

    if !teacher_allowed && homework.student_id != ctx.user.id {
        return Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ));
    }

    match storage.delete_homework(homework_id).await {
        Ok(true) => {
            info!("Homework {} deleted by user {}", homework_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Homework deleted successfully")))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Homework deletion failed: {e}"),
            )),
        ),
    }
}
