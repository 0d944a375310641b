//! 作业提交存储操作

use super::SeaOrmStorage;
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo,
    homeworks::{
        entities::Homework,
        requests::{CreateHomeworkRequest, HomeworkListQuery, UpdateHomeworkRequest},
        responses::HomeworkListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业提交
    pub async fn create_homework_impl(
        &self,
        hometask_id: i64,
        student_id: i64,
        req: CreateHomeworkRequest,
    ) -> Result<Homework> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            hometask_id: Set(hometask_id),
            student_id: Set(student_id),
            file_token: Set(req.file_token),
            mark: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建作业提交失败: {e}")))?;

        Ok(result.into_homework())
    }

    /// 通过 ID 获取作业提交
    pub async fn get_homework_by_id_impl(&self, homework_id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(homework_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询作业提交失败: {e}")))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 分页列出任务下的作业提交（最新提交在前）
    ///
    /// student_filter 为 Some 时只返回该学生的提交，学生视角的
    /// 列表范围限制由服务层传入。
    pub async fn list_homeworks_impl(
        &self,
        hometask_id: i64,
        student_filter: Option<i64>,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Homeworks::find().filter(Column::HometaskId.eq(hometask_id));

        if let Some(student_id) = student_filter {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询作业页数失败: {e}")))?;

        let homeworks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(HomeworkListResponse {
            items: homeworks.into_iter().map(|m| m.into_homework()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业提交（hometask/student 归属不可变，mark 不在此更新）
    pub async fn update_homework_impl(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        let existing = self.get_homework_by_id_impl(homework_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(homework_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(file_token) = update.file_token {
            model.file_token = Set(file_token);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新作业提交失败: {e}")))?;

        Ok(Some(result.into_homework()))
    }

    /// 设置作业评分
    ///
    /// 评分上限校验（mark <= max_mark）由服务层完成。
    pub async fn set_homework_mark_impl(
        &self,
        homework_id: i64,
        mark: i64,
    ) -> Result<Option<Homework>> {
        let existing = self.get_homework_by_id_impl(homework_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(homework_id),
            mark: Set(Some(mark)),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新作业评分失败: {e}")))?;

        Ok(Some(result.into_homework()))
    }

    /// 删除作业提交（级联删除下属评论）
    pub async fn delete_homework_impl(&self, homework_id: i64) -> Result<bool> {
        let result = Homeworks::delete_by_id(homework_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除作业提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
