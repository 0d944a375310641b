use serde::Serialize;

use super::entities::Homework;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct HomeworkListResponse {
    pub items: Vec<Homework>,
    pub pagination: PaginationInfo,
}

// 评分查询响应
#[derive(Debug, Serialize)]
pub struct MarkResponse {
    pub homework_id: i64,
    pub mark: i64,
    pub max_mark: i64,
}
