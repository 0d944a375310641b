//! 课后任务存储操作

use super::SeaOrmStorage;
use crate::entity::hometasks::{ActiveModel, Column, Entity as Hometasks};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo,
    hometasks::{
        entities::Hometask,
        requests::{CreateHometaskRequest, HometaskListQuery, UpdateHometaskRequest},
        responses::HometaskListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课后任务
    pub async fn create_hometask_impl(
        &self,
        lecture_id: i64,
        req: CreateHometaskRequest,
    ) -> Result<Hometask> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lecture_id: Set(lecture_id),
            text: Set(req.text),
            max_mark: Set(req.max_mark),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建课后任务失败: {e}")))?;

        Ok(result.into_hometask())
    }

    /// 通过 ID 获取课后任务
    pub async fn get_hometask_by_id_impl(&self, hometask_id: i64) -> Result<Option<Hometask>> {
        let result = Hometasks::find_by_id(hometask_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课后任务失败: {e}")))?;

        Ok(result.map(|m| m.into_hometask()))
    }

    /// 分页列出讲义下的课后任务（按创建时间正序）
    pub async fn list_hometasks_impl(
        &self,
        lecture_id: i64,
        query: HometaskListQuery,
    ) -> Result<HometaskListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Hometasks::find()
            .filter(Column::LectureId.eq(lecture_id))
            .order_by_asc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课后任务总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课后任务页数失败: {e}")))?;

        let hometasks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课后任务列表失败: {e}")))?;

        Ok(HometaskListResponse {
            items: hometasks.into_iter().map(|m| m.into_hometask()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课后任务（lecture 归属不可变）
    pub async fn update_hometask_impl(
        &self,
        hometask_id: i64,
        update: UpdateHometaskRequest,
    ) -> Result<Option<Hometask>> {
        let existing = self.get_hometask_by_id_impl(hometask_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(hometask_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        if let Some(max_mark) = update.max_mark {
            model.max_mark = Set(max_mark);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新课后任务失败: {e}")))?;

        Ok(Some(result.into_hometask()))
    }

    /// 删除课后任务（级联删除下属作业与评论）
    pub async fn delete_hometask_impl(&self, hometask_id: i64) -> Result<bool> {
        let result = Hometasks::delete_by_id(hometask_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除课后任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
