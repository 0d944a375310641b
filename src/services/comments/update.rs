use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CommentPath, CommentService, resolve_homework_chain};
use crate::models::comments::requests::UpdateCommentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted, forbidden_response};
use crate::services::context::resolve_comment_in_homework;

// 只有评论所有者可以编辑自己的评论，教师身份不赋予编辑他人评论的权利
pub async fn update_comment(
    service: &CommentService,
    request: &HttpRequest,
    path: CommentPath,
    comment_id: i64,
    update_data: UpdateCommentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (ctx, _homework) = match resolve_homework_chain(&storage, request, path).await {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Comment, Action::Update) {
        return Ok(resp);
    }

    let comment = match resolve_comment_in_homework(&storage, path.homework_id, comment_id).await {
        Ok(comment) => comment,
        Err(resp) => return Ok(resp),
    };

    if comment.owner_id != ctx.user.id {
        return Ok(forbidden_response());
    }

    match storage.update_comment(comment_id, update_data).await {
        Ok(Some(comment)) => {
            info!("Comment {} updated by user {}", comment_id, ctx.user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                comment,
                "Comment updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CommentNotFound,
            "Comment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Comment update failed: {e}"),
            )),
        ),
    }
}
