pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    // 列出当前用户所在的课程
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        query: CourseListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, query).await
    }

    // 创建课程，创建者自动进入教师名册
    pub async fn create_course(
        &self,
        request: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, course_data).await
    }

    // 获取课程详情（附带教师与学生名册）
    pub async fn get_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    // 更新课程信息
    pub async fn update_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, update_data).await
    }

    // 删除课程（级联删除全部下属资源）
    pub async fn delete_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }
}
