pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::comments::requests::{
    CommentListQuery, CreateCommentRequest, UpdateCommentRequest,
};
use crate::storage::Storage;

/// 评论服务
///
/// 评论挂在单次作业提交下，构成师生间的批改讨论串。
pub struct CommentService {
    storage: Option<Arc<dyn Storage>>,
}

impl CommentService {
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

    pub async fn list_comments(
        &self,
        request: &HttpRequest,
        path: CommentPath,
        query: CommentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_comments(self, request, path, query).await
    }

    pub async fn create_comment(
        &self,
        request: &HttpRequest,
        path: CommentPath,
        comment_data: CreateCommentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_comment(self, request, path, comment_data).await
    }

    pub async fn get_comment(
        &self,
        request: &HttpRequest,
        path: CommentPath,
        comment_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_comment(self, request, path, comment_id).await
    }

    pub async fn update_comment(
        &self,
        request: &HttpRequest,
        path: CommentPath,
        comment_id: i64,
        update_data: UpdateCommentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_comment(self, request, path, comment_id, update_data).await
    }

    pub async fn delete_comment(
        &self,
        request: &HttpRequest,
        path: CommentPath,
        comment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_comment(self, request, path, comment_id).await
    }
}

/// 评论路径的父级标识链
#[derive(Debug, Clone, Copy)]
pub struct CommentPath {
    pub course_id: i64,
    pub lecture_id: i64,
    pub hometask_id: i64,
    pub homework_id: i64,
}

use crate::models::homeworks::entities::Homework;
use crate::services::context::{
    CourseContext, resolve_course_context, resolve_homework_in_hometask,
    resolve_hometask_in_lecture, resolve_lecture_in_course,
};

/// 沿父链解析到目标作业，任何一级缺失都按 404 处理
pub(crate) async fn resolve_homework_chain(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    path: CommentPath,
) -> Result<(CourseContext, Homework), HttpResponse> {
    let ctx = resolve_course_context(storage, request, path.course_id).await?;
    resolve_lecture_in_course(storage, path.course_id, path.lecture_id).await?;
    resolve_hometask_in_lecture(storage, path.lecture_id, path.hometask_id).await?;
    let homework =
        resolve_homework_in_hometask(storage, path.hometask_id, path.homework_id).await?;
    Ok((ctx, homework))
}
