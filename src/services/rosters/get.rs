use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::ApiResponse;
use crate::models::course_members::entities::CourseRole;
use crate::models::course_members::responses::RosterResponse;
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;
use crate::services::courses::get::load_roster_briefs;

pub async fn get_roster(
    service: &RosterService,
    request: &HttpRequest,
    course_id: i64,
    role: CourseRole,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Roster, Action::List) {
        return Ok(resp);
    }

    let members = match load_roster_briefs(&storage, course_id, role).await {
        Ok(briefs) => briefs,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RosterResponse { course_id, members },
        "Roster retrieved successfully",
    )))
}
