use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CommentPath, CommentService, resolve_homework_chain};
use crate::config::AppConfig;
use crate::models::comments::requests::CreateCommentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted, forbidden_response};

// 评论人是课程教师，或目标作业的提交者本人。comment_requires_mark
// 策略开启时，未评分的作业不开放讨论串。
pub async fn create_comment(
    service: &CommentService,
    request: &HttpRequest,
    path: CommentPath,
    comment_data: CreateCommentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let policy = &AppConfig::get().policy;

    let (ctx, homework) = match resolve_homework_chain(&storage, request, path).await {
        Ok(resolved) => resolved,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Comment, Action::Create) {
        return Ok(resp);
    }

    // 学生只能评论自己的提交
    if !ctx.membership.is_teacher && homework.student_id != ctx.user.id {
        return Ok(forbidden_response());
    }

    if policy.comment_requires_mark && homework.mark.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CommentNotAllowed,
            "Comments are only allowed on marked homework",
        )));
    }

    if comment_data.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Comment text must not be empty",
        )));
    }

    match storage
        .create_comment(path.homework_id, ctx.user.id, comment_data)
        .await
    {
        Ok(comment) => {
            info!(
                "Comment {} created on homework {} by user {}",
                comment.id, path.homework_id, ctx.user.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                comment,
                "Comment created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Comment creation failed: {e}"),
            )),
        ),
    }
}
