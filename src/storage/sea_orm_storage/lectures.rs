//! 讲义存储操作

use super::SeaOrmStorage;
use crate::entity::lectures::{ActiveModel, Column, Entity as Lectures};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo,
    lectures::{
        entities::Lecture,
        requests::{CreateLectureRequest, LectureListQuery, UpdateLectureRequest},
        responses::LectureListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建讲义
    pub async fn create_lecture_impl(
        &self,
        course_id: i64,
        req: CreateLectureRequest,
    ) -> Result<Lecture> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            name: Set(req.name),
            file_token: Set(req.file_token),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建讲义失败: {e}")))?;

        Ok(result.into_lecture())
    }

    /// 通过 ID 获取讲义
    pub async fn get_lecture_by_id_impl(&self, lecture_id: i64) -> Result<Option<Lecture>> {
        let result = Lectures::find_by_id(lecture_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询讲义失败: {e}")))?;

        Ok(result.map(|m| m.into_lecture()))
    }

    /// 分页列出课程内的讲义（按创建时间正序，即授课顺序）
    pub async fn list_lectures_impl(
        &self,
        course_id: i64,
        query: LectureListQuery,
    ) -> Result<LectureListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Lectures::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询讲义总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询讲义页数失败: {e}")))?;

        let lectures = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询讲义列表失败: {e}")))?;

        Ok(LectureListResponse {
            items: lectures.into_iter().map(|m| m.into_lecture()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新讲义（course 归属不可变）
    pub async fn update_lecture_impl(
        &self,
        lecture_id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<Lecture>> {
        let existing = self.get_lecture_by_id_impl(lecture_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(lecture_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(file_token) = update.file_token {
            model.file_token = Set(file_token);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新讲义失败: {e}")))?;

        Ok(Some(result.into_lecture()))
    }

    /// 删除讲义（级联删除下属任务、作业与评论）
    pub async fn delete_lecture_impl(&self, lecture_id: i64) -> Result<bool> {
        let result = Lectures::delete_by_id(lecture_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除讲义失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
