//! 路径参数安全提取器
//!
//! 将命名路径参数解析为正整数 ID，解析失败时统一返回 400 响应，
//! 避免在每个处理函数里重复写解析逻辑。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|s| s.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => Err(actix_web::error::InternalError::from_response(
                            concat!("invalid ", $param),
                            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                                ErrorCode::BadRequest,
                                concat!("Missing or invalid ", $param),
                            )),
                        )
                        .into()),
                    })
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeCourseIdI64("course_id"),
    SafeLectureIdI64("lecture_id"),
    SafeHometaskIdI64("hometask_id"),
    SafeHomeworkIdI64("homework_id"),
    SafeCommentIdI64("comment_id"),
}
