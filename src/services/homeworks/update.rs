use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::HomeworkService;
use crate::models::homeworks::requests::UpdateHomeworkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    not_found, resolve_course_context, resolve_homework_in_hometask,
    resolve_hometask_in_lecture, resolve_lecture_in_course,
};

// 只有提交者本人可以替换文件；hometask/student 归属与 mark 均不在
// 更新请求模型中，请求体里的同名字段在反序列化时即被丢弃。
pub async fn update_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_id: i64,
    update_data: UpdateHomeworkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    // 教师不得修改学生提交
    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::Update) {
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

    // 学生的写范围同样限定到本人提交
    if homework.student_id != ctx.user.id {
        return Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ));
    }

    match storage.update_homework(homework_id, update_data).await {
        Ok(Some(homework)) => {
            info!("Homework {} updated by student {}", homework_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                homework,
                "Homework updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Homework update failed: {e}"),
            )),
        ),
    }
}
