use serde::Serialize;

use super::entities::Course;
use crate::models::PaginationInfo;
use crate::models::users::responses::UserBrief;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

// 课程详情响应，附带两份名册
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: Course,
    pub teachers: Vec<UserBrief>,
    pub students: Vec<UserBrief>,
}
