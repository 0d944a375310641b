use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::CourseService;
use crate::models::course_members::entities::CourseRole;
use crate::models::courses::responses::CourseDetailResponse;
use crate::models::users::responses::UserBrief;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;
use crate::storage::Storage;

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    // 非成员对真实课程的访问必须是 403，而不是空结果
    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Course, Action::Retrieve) {
        return Ok(resp);
    }

    let teachers = match load_roster_briefs(&storage, course_id, CourseRole::Teacher).await {
        Ok(briefs) => briefs,
        Err(resp) => return Ok(resp),
    };
    let students = match load_roster_briefs(&storage, course_id, CourseRole::Student).await {
        Ok(briefs) => briefs,
        Err(resp) => return Ok(resp),
    };

    let response = CourseDetailResponse {
        course: ctx.course,
        teachers,
        students,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Course retrieved successfully",
    )))
}

/// 加载一份名册并解析为用户摘要
pub(crate) async fn load_roster_briefs(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    role: CourseRole,
) -> Result<Vec<UserBrief>, HttpResponse> {
    let members = storage
        .list_course_members(course_id, role)
        .await
        .map_err(|e| {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list course members: {e}"),
            ))
        })?;

    let user_ids: Vec<i64> = members.iter().map(|m| m.user_id).collect();

    let users = storage.get_users_by_ids(&user_ids).await.map_err(|e| {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to load roster users: {e}"),
        ))
    })?;

    Ok(users.iter().map(UserBrief::from).collect())
}
