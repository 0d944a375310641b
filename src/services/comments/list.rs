use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CommentPath, CommentService, resolve_homework_chain};
use crate::models::comments::requests::CommentListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::not_found;

// 讨论串对教师和提交者本人开放，其他学生看不到该作业本身，
// 自然也看不到它的评论
pub async fn list_comments(
    service: &CommentService,
    request: &HttpRequest,
    path: CommentPath,
    query: CommentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (ctx, homework) = match resolve_homework_chain(&storage, request, path).await {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Comment, Action::List) {
        return Ok(resp);
    }

    if !ctx.membership.is_teacher && homework.student_id != ctx.user.id {
        return Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ));
    }

    match storage.list_comments(path.homework_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Comments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list comments: {e}"),
            )),
        ),
    }
}
