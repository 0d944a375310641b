use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::course_members::entities::CourseRole;
use crate::models::course_members::requests::RosterChangeRequest;
use crate::models::courses::requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest};
use crate::services::{CourseService, RosterService};
use crate::utils::SafeCourseIdI64;

// 懒加载的全局服务实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static ROSTER_SERVICE: Lazy<RosterService> = Lazy::new(RosterService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

// 名册处理程序
pub async fn get_teachers(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .get_roster(&req, course_id.0, CourseRole::Teacher)
        .await
}

pub async fn add_teachers(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    change: web::Json<RosterChangeRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .add_members(&req, course_id.0, CourseRole::Teacher, change.into_inner())
        .await
}

pub async fn get_students(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .get_roster(&req, course_id.0, CourseRole::Student)
        .await
}

pub async fn add_students(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    change: web::Json<RosterChangeRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .add_members(&req, course_id.0, CourseRole::Student, change.into_inner())
        .await
}

pub async fn remove_students(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    change: web::Json<RosterChangeRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .remove_members(&req, course_id.0, CourseRole::Student, change.into_inner())
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{course_id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course))
                    .route(web::delete().to(delete_course)),
            )
            .service(
                // 教师名册只增不减：课程至少保留一名教师
                web::resource("/{course_id}/teachers")
                    .route(web::get().to(get_teachers))
                    .route(web::post().to(add_teachers)),
            )
            .service(
                web::resource("/{course_id}/students")
                    .route(web::get().to(get_students))
                    .route(web::post().to(add_students))
                    .route(web::delete().to(remove_students)),
            ),
    );
}
