use serde::Serialize;

use crate::models::users::responses::UserBrief;

// 单份名册响应（教师或学生）
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub course_id: i64,
    pub members: Vec<UserBrief>,
}
