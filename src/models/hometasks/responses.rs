use serde::Serialize;

use super::entities::Hometask;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct HometaskListResponse {
    pub items: Vec<Hometask>,
    pub pagination: PaginationInfo,
}
