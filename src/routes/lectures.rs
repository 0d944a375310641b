use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lectures::requests::{
    CreateLectureRequest, LectureListQuery, UpdateLectureRequest,
};
use crate::services::LectureService;
use crate::utils::{SafeCourseIdI64, SafeLectureIdI64};

// 懒加载的全局 LECTURE_SERVICE 实例
static LECTURE_SERVICE: Lazy<LectureService> = Lazy::new(LectureService::new_lazy);

// HTTP处理程序
pub async fn list_lectures(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<LectureListQuery>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .list_lectures(&req, course_id.0, query.into_inner())
        .await
}

pub async fn create_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_data: web::Json<CreateLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .create_lecture(&req, course_id.0, lecture_data.into_inner())
        .await
}

pub async fn get_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .get_lecture(&req, course_id.0, lecture_id.0)
        .await
}

pub async fn update_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    update_data: web::Json<UpdateLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .update_lecture(&req, course_id.0, lecture_id.0, update_data.into_inner())
        .await
}

pub async fn delete_lecture(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .delete_lecture(&req, course_id.0, lecture_id.0)
        .await
}

// 配置路由
pub fn configure_lecture_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/lecture")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_lectures))
                    .route(web::post().to(create_lecture)),
            )
            .service(
                web::resource("/{lecture_id}")
                    .route(web::get().to(get_lecture))
                    .route(web::put().to(update_lecture))
                    .route(web::delete().to(delete_lecture)),
            ),
    );
}
