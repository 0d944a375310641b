use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RosterService;
use crate::models::course_members::entities::CourseRole;
use crate::models::course_members::requests::RosterChangeRequest;
use crate::models::course_members::responses::RosterResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;
use crate::services::courses::get::load_roster_briefs;

// 增量移除：不在名册内的用户是 no-op，并发编辑下不会互相覆盖
pub async fn remove_members(
    service: &RosterService,
    request: &HttpRequest,
    course_id: i64,
    role: CourseRole,
    change: RosterChangeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Roster, Action::Delete) {
        return Ok(resp);
    }

    for &user_id in &change.user_ids {
        if let Err(e) = storage
            .remove_course_member(course_id, user_id, role)
            .await
        {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to remove user {user_id} from roster: {e}"),
                )),
            );
        }
    }

    info!(
        "User {} removed {} member(s) from {} roster of course {}",
        ctx.user.id,
        change.user_ids.len(),
        role,
        course_id
    );

    let members = match load_roster_briefs(&storage, course_id, role).await {
        Ok(briefs) => briefs,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RosterResponse { course_id, members },
        "Roster updated successfully",
    )))
}
