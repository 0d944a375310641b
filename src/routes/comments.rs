use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::comments::requests::{
    CommentListQuery, CreateCommentRequest, UpdateCommentRequest,
};
use crate::services::CommentService;
use crate::services::comments::CommentPath;
use crate::utils::{
    SafeCommentIdI64, SafeCourseIdI64, SafeHometaskIdI64, SafeHomeworkIdI64, SafeLectureIdI64,
};

// 懒加载的全局 COMMENT_SERVICE 实例
static COMMENT_SERVICE: Lazy<CommentService> = Lazy::new(CommentService::new_lazy);

fn comment_path(
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
) -> CommentPath {
    CommentPath {
        course_id: course_id.0,
        lecture_id: lecture_id.0,
        hometask_id: hometask_id.0,
        homework_id: homework_id.0,
    }
}

// HTTP处理程序
pub async fn list_comments(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    query: web::Query<CommentListQuery>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .list_comments(
            &req,
            comment_path(course_id, lecture_id, hometask_id, homework_id),
            query.into_inner(),
        )
        .await
}

pub async fn create_comment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    comment_data: web::Json<CreateCommentRequest>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .create_comment(
            &req,
            comment_path(course_id, lecture_id, hometask_id, homework_id),
            comment_data.into_inner(),
        )
        .await
}

pub async fn get_comment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    comment_id: SafeCommentIdI64,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .get_comment(
            &req,
            comment_path(course_id, lecture_id, hometask_id, homework_id),
            comment_id.0,
        )
        .await
}

pub async fn update_comment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    comment_id: SafeCommentIdI64,
    update_data: web::Json<UpdateCommentRequest>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .update_comment(
            &req,
            comment_path(course_id, lecture_id, hometask_id, homework_id),
            comment_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_comment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    lecture_id: SafeLectureIdI64,
    hometask_id: SafeHometaskIdI64,
    homework_id: SafeHomeworkIdI64,
    comment_id: SafeCommentIdI64,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .delete_comment(
            &req,
            comment_path(course_id, lecture_id, hometask_id, homework_id),
            comment_id.0,
        )
        .await
}

// 配置路由
pub fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(
            "/api/v1/courses/{course_id}/lecture/{lecture_id}/hometask/{hometask_id}/homework/{homework_id}/comment",
        )
        .wrap(middlewares::RequireJWT)
        .service(
            web::resource("")
                .route(web::get().to(list_comments))
                .route(web::post().to(create_comment)),
        )
        .service(
            web::resource("/{comment_id}")
                .route(web::get().to(get_comment))
                .route(web::put().to(update_comment))
                .route(web::delete().to(delete_comment)),
        ),
    );
}
