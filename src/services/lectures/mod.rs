pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lectures::requests::{
    CreateLectureRequest, LectureListQuery, UpdateLectureRequest,
};
use crate::storage::Storage;

pub struct LectureService {
    storage: Option<Arc<dyn Storage>>,
}

impl LectureService {
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

    pub async fn list_lectures(
        &self,
        request: &HttpRequest,
        course_id: i64,
        query: LectureListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_lectures(self, request, course_id, query).await
    }

    pub async fn create_lecture(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_data: CreateLectureRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lecture(self, request, course_id, lecture_data).await
    }

    pub async fn get_lecture(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_lecture(self, request, course_id, lecture_id).await
    }

    pub async fn update_lecture(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        update_data: UpdateLectureRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_lecture(self, request, course_id, lecture_id, update_data).await
    }

    pub async fn delete_lecture(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_lecture(self, request, course_id, lecture_id).await
    }
}
