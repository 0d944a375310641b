use serde::Serialize;

use super::entities::Lecture;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct LectureListResponse {
    pub items: Vec<Lecture>,
    pub pagination: PaginationInfo,
}
