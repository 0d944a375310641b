pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mark;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::homeworks::requests::{
    CreateHomeworkRequest, HomeworkListQuery, SetMarkRequest, UpdateHomeworkRequest,
};
use crate::storage::Storage;

/// 作业提交服务
///
/// 同一任务允许同一学生多次提交，历史全部保留。评分是独立于普通
/// 更新的操作，走单独的路径与规则。
pub struct HomeworkService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeworkService {
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

    pub async fn list_homeworks(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        query: HomeworkListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_homeworks(self, request, course_id, lecture_id, hometask_id, query).await
    }

    pub async fn create_homework(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        homework_data: CreateHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_homework(
            self,
            request,
            course_id,
            lecture_id,
            hometask_id,
            homework_data,
        )
        .await
    }

    pub async fn get_homework(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_homework(self, request, course_id, lecture_id, hometask_id, homework_id).await
    }

    pub async fn update_homework(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        homework_id: i64,
        update_data: UpdateHomeworkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_homework(
            self,
            request,
            course_id,
            lecture_id,
            hometask_id,
            homework_id,
            update_data,
        )
        .await
    }

    pub async fn delete_homework(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_homework(self, request, course_id, lecture_id, hometask_id, homework_id)
            .await
    }

    // 查询评分
    pub async fn get_mark(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark::get_mark(self, request, course_id, lecture_id, hometask_id, homework_id).await
    }

    // 设置评分（教师专属）
    pub async fn set_mark(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lecture_id: i64,
        hometask_id: i64,
        homework_id: i64,
        mark_data: SetMarkRequest,
    ) -> ActixResult<HttpResponse> {
        mark::set_mark(
            self,
            request,
            course_id,
            lecture_id,
            hometask_id,
            homework_id,
            mark_data,
        )
        .await
    }
}
