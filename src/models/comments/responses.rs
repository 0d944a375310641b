use serde::Serialize;

use super::entities::Comment;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub items: Vec<Comment>,
    pub pagination: PaginationInfo,
}
