pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeCommentIdI64, SafeCourseIdI64, SafeHometaskIdI64, SafeHomeworkIdI64, SafeLectureIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
