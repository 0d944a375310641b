use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::hometasks::requests::{
    CreateHometaskRequest, HometaskListQuery, UpdateHometaskRequest,
};
use crate::services::HometaskService;
use crate::utils::{SafeCourseIdI64, SafeHometaskIdI64, SafeLectureIdI64};

// 懒加载的全局 HOMETASK_SERVICE 实例
static HOMETASK_SERVICE: Lazy<HometaskService> = Lazy::new(HometaskService::new_lazy);

// HTTP处理程序
pub async fn list_hometasks(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    query: web::Query<HometaskListQuery>,
) -> ActixResult<HttpResponse> {
    HOMETASK_SERVICE
        .list_hometasks(&req, course_id.0, lecture_id.0, query.into_inner())
        .await
}

pub async fn create_hometask(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_data: web::Json<CreateHometaskRequest>,
) -> ActixResult<HttpResponse> {
    HOMETASK_SERVICE
        .create_hometask(&req, course_id.0, lecture_id.0, hometask_data.into_inner())
        .await
}

pub async fn get_hometask(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
) -> ActixResult<HttpResponse> {
    HOMETASK_SERVICE
        .get_hometask(&req, course_id.0, lecture_id.0, hometask_id.0)
        .await
}

pub async fn update_hometask(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    update_data: web::Json<UpdateHometaskRequest>,
) -> ActixResult<HttpResponse> {
    HOMETASK_SERVICE
        .update_hometask(
            &req,
            course_id.0,
            lecture_id.0,
            hometask_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_hometask(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
) -> ActixResult<HttpResponse> {
    HOMETASK_SERVICE
        .delete_hometask(&req, course_id.0, lecture_id.0, hometask_id.0)
        .await
}

// 配置路由
pub fn configure_hometask_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/lecture/{lecture_id}/hometask")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_hometasks))
                    .route(web::post().to(create_hometask)),
            )
            .service(
                web::resource("/{hometask_id}")
                    .route(web::get().to(get_hometask))
                    .route(web::put().to(update_hometask))
                    .route(web::delete().to(delete_hometask)),
            ),
    );
}
