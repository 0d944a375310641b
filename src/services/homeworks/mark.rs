//! 评分操作
//!
//! 评分不是普通字段更新：写入教师专属，超出任务上限的分值整体
//! 拒绝而非截断，已有分值保持不变。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::HomeworkService;
use crate::models::hometasks::entities::Hometask;
use crate::models::homeworks::entities::Homework;
use crate::models::homeworks::requests::SetMarkRequest;
use crate::models::homeworks::responses::MarkResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{
    CourseContext, not_found, resolve_course_context, resolve_homework_in_hometask,
    resolve_hometask_in_lecture, resolve_lecture_in_course,
};
use crate::storage::Storage;

async fn resolve_grading_chain(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_id: i64,
) -> Result<(CourseContext, Hometask, Homework), HttpResponse> {
    let ctx = resolve_course_context(storage, request, course_id).await?;
    resolve_lecture_in_course(storage, course_id, lecture_id).await?;
    let hometask = resolve_hometask_in_lecture(storage, lecture_id, hometask_id).await?;
    let homework = resolve_homework_in_hometask(storage, hometask_id, homework_id).await?;
    Ok((ctx, hometask, homework))
}

// 分值校验：负数与超出任务上限都整体拒绝，不做截断
fn check_mark_bounds(mark: i64, max_mark: i64) -> Result<(), HttpResponse> {
    if mark < 0 {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "mark must not be negative",
        )));
    }

    if mark > max_mark {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarkExceedsMaximum,
            format!("mark {mark} exceeds the hometask maximum of {max_mark}"),
        )));
    }

    Ok(())
}

// 评分读取：教师或提交者本人
pub async fn get_mark(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (ctx, hometask, homework) = match resolve_grading_chain(
        &storage, request, course_id, lecture_id, hometask_id, homework_id,
    )
    .await
    {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::Retrieve) {
        return Ok(resp);
    }

    if !ctx.membership.is_teacher && homework.student_id != ctx.user.id {
        return Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ));
    }

    match homework.mark {
        Some(mark) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MarkResponse {
                homework_id,
                mark,
                max_mark: hometask.max_mark,
            },
            "Mark retrieved successfully",
        ))),
        None => Ok(not_found(
            ErrorCode::MarkNotSet,
            "Homework has not been marked yet",
        )),
    }
}

// 评分写入：教师专属，mark > max_mark 拒绝整个请求
pub async fn set_mark(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    homework_id: i64,
    mark_data: SetMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (ctx, hometask, _homework) = match resolve_grading_chain(
        &storage, request, course_id, lecture_id, hometask_id, homework_id,
    )
    .await
    {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::Mark) {
        return Ok(resp);
    }

    if let Err(resp) = check_mark_bounds(mark_data.mark, hometask.max_mark) {
        return Ok(resp);
    }

    match storage.set_homework_mark(homework_id, mark_data.mark).await {
        Ok(Some(homework)) => {
            info!(
                "Homework {} marked {} by teacher {}",
                homework_id, mark_data.mark, ctx.user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkResponse {
                    homework_id,
                    mark: homework.mark.unwrap_or(mark_data.mark),
                    max_mark: hometask.max_mark,
                },
                "Mark set successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to set mark: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_mark_within_maximum_accepted() {
        assert!(check_mark_bounds(0, 10).is_ok());
        assert!(check_mark_bounds(8, 10).is_ok());
        assert!(check_mark_bounds(10, 10).is_ok());
    }

    #[test]
    fn test_mark_above_maximum_rejected() {
        let resp = check_mark_bounds(12, 10).unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_negative_mark_rejected() {
        let resp = check_mark_bounds(-1, 10).unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
