use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::CourseListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::current_user;

// 课程列表天然限定在用户自己的名册范围内：既是查询范围规则，
// 也是 list 权限规则本身，两者在这里合一。
pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    match storage.list_courses_for_user(user.id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Courses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list courses: {e}"),
            )),
        ),
    }
}
