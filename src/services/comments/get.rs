use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CommentPath, CommentService, resolve_homework_chain};
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::{not_found, resolve_comment_in_homework};

pub async fn get_comment(
    service: &CommentService,
    request: &HttpRequest,
    path: CommentPath,
    comment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (ctx, homework) = match resolve_homework_chain(&storage, request, path).await {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Comment, Action::Retrieve) {
        return Ok(resp);
    }

    if !ctx.membership.is_teacher && homework.student_id != ctx.user.id {
        return Ok(not_found(
            ErrorCode::HomeworkNotFound,
            "Homework not found",
        ));
    }

    let comment = match resolve_comment_in_homework(&storage, path.homework_id, comment_id).await {
        Ok(comment) => comment,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        comment,
        "Comment retrieved successfully",
    )))
}
