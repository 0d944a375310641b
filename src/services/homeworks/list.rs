use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::homeworks::requests::HomeworkListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::permissions::{Action, CourseMembership, Resource, ensure_permitted};
use crate::services::context::{
    resolve_course_context, resolve_hometask_in_lecture, resolve_lecture_in_course,
};

// 教师看到任务下全部提交；学生的查询范围限定到本人。读操作取两种
// 身份中更宽松的一条，教师身份成立时不再收窄范围。
fn student_scope(membership: &CourseMembership, user_id: i64) -> Option<i64> {
    if membership.is_teacher {
        None
    } else {
        Some(user_id)
    }
}

pub async fn list_homeworks(
    service: &HomeworkService,
    request: &HttpRequest,
    course_id: i64,
    lecture_id: i64,
    hometask_id: i64,
    query: HomeworkListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ctx = match resolve_course_context(&storage, request, course_id).await {
        Ok(ctx) => ctx,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = ensure_permitted(&ctx.membership, Resource::Homework, Action::List) {
        return Ok(resp);
    }

    if let Err(resp) = resolve_lecture_in_course(&storage, course_id, lecture_id).await {
        return Ok(resp);
    }

    if let Err(resp) = resolve_hometask_in_lecture(&storage, lecture_id, hometask_id).await {
        return Ok(resp);
    }

    let student_filter = student_scope(&ctx.membership, ctx.user.id);

    match storage
        .list_homeworks(hometask_id, student_filter, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Homeworks retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list homeworks: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(is_teacher: bool, is_student: bool) -> CourseMembership {
        CourseMembership {
            is_teacher,
            is_student,
        }
    }

    #[test]
    fn test_teacher_sees_all_submissions() {
        assert_eq!(student_scope(&membership(true, false), 42), None);
    }

    #[test]
    fn test_student_scope_narrows_to_self() {
        assert_eq!(student_scope(&membership(false, true), 42), Some(42));
    }

    #[test]
    fn test_dual_membership_keeps_teacher_breadth() {
        assert_eq!(student_scope(&membership(true, true), 42), None);
    }
}
