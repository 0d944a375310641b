use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CommentPath, CommentService, resolve_homework_chain};
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted, forbidden_response};
use crate::services::context::resolve_comment_in_homework;

pub async fn delete_comment(
    service: &CommentService,
    request: &HttpRequest,
    path: CommentPath,
    comment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (ctx, _homework) = match resolve_homework_chain(&storage, request, path).await {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Comment, Action::Delete) {
        return Ok(resp);
    }

    let comment = match resolve_comment_in_homework(&storage, path.homework_id, comment_id).await {
        Ok(comment) => comment,
        Err(resp) => return Ok(resp),
    };

    if comment.owner_id != ctx.user.id {
        return Ok(forbidden_response());
    }

    match storage.delete_comment(comment_id).await {
        Ok(true) => {
            info!("Comment {} deleted by user {}", comment_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Comment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CommentNotFound,
            "Comment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Comment deletion failed: {e}"),
            )),
        ),
    }
}
