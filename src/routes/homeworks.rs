use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::homeworks::requests::{
    CreateHomeworkRequest, HomeworkListQuery, SetMarkRequest, UpdateHomeworkRequest,
};
use crate::services::HomeworkService;
use crate::utils::{SafeCourseIdI64, SafeHometaskIdI64, SafeHomeworkIdI64, SafeLectureIdI64};

// 懒加载的全局 HOMEWORK_SERVICE 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// HTTP处理程序
pub async fn list_homeworks(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    query: web::Query<HomeworkListQuery>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_homeworks(
            &req,
            course_id.0,
            lecture_id.0,
            hometask_id.0,
            query.into_inner(),
        )
        .await
}

pub async fn create_homework(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_data: web::Json<CreateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .create_homework(
            &req,
            course_id.0,
            lecture_id.0,
            hometask_id.0,
            homework_data.into_inner(),
        )
        .await
}

pub async fn get_homework(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .get_homework(&req, course_id.0, lecture_id.0, hometask_id.0, homework_id.0)
        .await
}

pub async fn update_homework(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    update_data: web::Json<UpdateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .update_homework(
            &req,
            course_id.0,
            lecture_id.0,
            hometask_id.0,
            homework_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_homework(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .delete_homework(&req, course_id.0, lecture_id.0, hometask_id.0, homework_id.0)
        .await
}

// 评分处理程序
pub async fn get_mark(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .get_mark(&req, course_id.0, lecture_id.0, hometask_id.0, homework_id.0)
        .await
}

pub async fn set_mark(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    mark_data: web::Json<SetMarkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .set_mark(
            &req,
            course_id.0,
            lecture_id.0,
            hometask_id.0,
            homework_id.0,
            mark_data.into_inner(),
        )
        .await
}

// 配置路由
pub fn configure_homework_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/lecture/{lecture_id}/hometask/{hometask_id}/homework")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_homeworks))
                    .route(web::post().to(create_homework)),
            )
            .service(
                web::resource("/{homework_id}")
                    .route(web::get().to(get_homework))
                    .route(web::put().to(update_homework))
                    .route(web::delete().to(delete_homework)),
            )
            .service(
                web::resource("/{homework_id}/mark")
                    .route(web::get().to(get_mark))
                    .route(web::put().to(set_mark)),
            ),
    );
}
