pub mod add;
pub mod get;
pub mod remove;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::course_members::entities::CourseRole;
use crate::models::course_members::requests::RosterChangeRequest;
use crate::storage::Storage;

/// 名册服务
///
/// 教师名册支持查询与增量添加，学生名册额外支持增量移除。
/// 所有变更都是幂等的集合操作，不做整套替换。
pub struct RosterService {
    storage: Option<Arc<dyn Storage>>,
}

impl RosterService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 查询名册
    pub async fn get_roster(
        &self,
        request: &HttpRequest,
        course_id: i64,
        role: CourseRole,
    ) -> ActixResult<HttpResponse> {
        get::get_roster(self, request, course_id, role).await
    }

    // 增量添加名册成员
    pub async fn add_members(
        &self,
        request: &HttpRequest,
        course_id: i64,
        role: CourseRole,
        change: RosterChangeRequest,
    ) -> ActixResult<HttpResponse> {
        add::add_members(self, request, course_id, role, change).await
    }

    // 增量移除名册成员
    pub async fn remove_members(
        &self,
        request: &HttpRequest,
        course_id: i64,
        role: CourseRole,
        change: RosterChangeRequest,
    ) -> ActixResult<HttpResponse> {
        remove::remove_members(self, request, course_id, role, change).await
    }
}
