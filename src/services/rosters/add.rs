use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RosterService;
use crate::models::course_members::entities::{CourseMember, CourseRole};
use crate::models::course_members::requests::RosterChangeRequest;
use crate::models::course_members::responses::RosterResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, Resource, ensure_permitted};
use crate::services::context::resolve_course_context;
use crate::services::courses::get::load_roster_briefs;

// 同角色重复添加是幂等 no-op；已持有另一角色则整个请求拒绝，
// 同一用户绝不允许同时出现在教师与学生两份名册中。
fn conflicting_role(existing: Option<&CourseMember>, requested: CourseRole) -> Option<CourseRole> {
    match existing {
        Some(member) if member.role != requested => Some(member.role),
        _ => None,
    }
}

// 增量添加：已在名册内的用户直接跳过，保证重复提交幂等。
pub async fn add_members(
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

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Roster, Action::Create) {
        return Ok(resp);
    }

    // 先整体校验，任何一个冲突都拒绝整个请求，不留部分变更
    for &user_id in &change.user_ids {
        match storage.get_user_by_id(user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    format!("User {user_id} not found"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check user {user_id}: {e}"),
                    )),
                );
            }
        }

        match storage.get_course_member(user_id, course_id).await {
            Ok(existing) => {
                if let Some(held) = conflicting_role(existing.as_ref(), role) {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::RosterRoleConflict,
                        format!("User {user_id} is already a {held} of this course"),
                    )));
                }
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check roster membership: {e}"),
                    )),
                );
            }
        }
    }

    for &user_id in &change.user_ids {
        if let Err(e) = storage.add_course_member(course_id, user_id, role).await {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add user {user_id} to roster: {e}"),
                )),
            );
        }
    }

    info!(
        "User {} added {} member(s) to {} roster of course {}",
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn member(role: CourseRole) -> CourseMember {
        CourseMember {
            id: 1,
            course_id: 1,
            user_id: 1,
            role,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn test_absent_user_has_no_conflict() {
        assert_eq!(conflicting_role(None, CourseRole::Student), None);
        assert_eq!(conflicting_role(None, CourseRole::Teacher), None);
    }

    #[test]
    fn test_same_role_readd_has_no_conflict() {
        let m = member(CourseRole::Student);
        assert_eq!(conflicting_role(Some(&m), CourseRole::Student), None);
    }

    #[test]
    fn test_cross_roster_add_conflicts() {
        let teacher = member(CourseRole::Teacher);
        assert_eq!(
            conflicting_role(Some(&teacher), CourseRole::Student),
            Some(CourseRole::Teacher)
        );

        let student = member(CourseRole::Student);
        assert_eq!(
            conflicting_role(Some(&student), CourseRole::Teacher),
            Some(CourseRole::Student)
        );
    }
}
