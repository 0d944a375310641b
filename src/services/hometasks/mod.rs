pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::hometasks::requests::{
    CreateHometaskRequest, HometaskListQuery, UpdateHometaskRequest,
};
use crate::storage::Storage;

pub struct HometaskService {
    storage: Option<Arc<dyn Storage>>,
}

impl HometaskService {
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

    pub async fn list_hometasks(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        query: HometaskListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_hometasks(self, request, course_id, lecture_id, query).await
    }

    pub async fn create_hometask(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_data: CreateHometaskRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_hometask(self, request, course_id, lecture_id, hometask_data).await
    }

    pub async fn get_hometask(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_hometask(self, request, course_id, lecture_id, hometask_id).await
    }

    pub async fn update_hometask(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        update_data: UpdateHometaskRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_hometask(self, request, course_id, lecture_id, hometask_id, update_data)
            .await
    }

    pub async fn delete_hometask(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_hometask(self, request, course_id, lecture_id, hometask_id).await
    }
}
