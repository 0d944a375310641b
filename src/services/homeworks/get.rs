use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    not_found, resolve_course_context, resolve_homework_in_hometask,
    resolve_hometask_in_lecture, resolve_lecture_in_course,
};

pub async fn get_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::Retrieve) {
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

    // 学生的可见范围限定到本人提交，他人的提交等同于不存在
    if !ctx.membership.is_teacher && homework.student_id != ctx.user.id {
        return Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        homework,
        "Homework retrieved successfully",
    )))
}
