//! 评论存储操作

use super::SeaOrmStorage;
use crate::entity::comments::{ActiveModel, Column, Entity as Comments};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo,
    comments::{
        entities::Comment,
        requests::{CommentListQuery, CreateCommentRequest, UpdateCommentRequest},
        responses::CommentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建评论
    pub async fn create_comment_impl(
        &self,
        homework_id: i64,
        owner_id: i64,
        req: CreateCommentRequest,
    ) -> Result<Comment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            homework_id: Set(homework_id),
            owner_id: Set(owner_id),
            text: Set(req.text),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建评论失败: {e}")))?;

        Ok(result.into_comment())
    }

    /// 通过 ID 获取评论
    pub async fn get_comment_by_id_impl(&self, comment_id: i64) -> Result<Option<Comment>> {
        let result = Comments::find_by_id(comment_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询评论失败: {e}")))?;

        Ok(result.map(|m| m.into_comment()))
    }

    /// 分页列出作业下的评论（按时间正序，即对话顺序）
    pub async fn list_comments_impl(
        &self,
        homework_id: i64,
        query: CommentListQuery,
    ) -> Result<CommentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Comments::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询评论总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询评论页数失败: {e}")))?;

        let comments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询评论列表失败: {e}")))?;

        Ok(CommentListResponse {
            items: comments.into_iter().map(|m| m.into_comment()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新评论（homework/owner 归属不可变）
    pub async fn update_comment_impl(
        &self,
        comment_id: i64,
        update: UpdateCommentRequest,
    ) -> Result<Option<Comment>> {
        let existing = self.get_comment_by_id_impl(comment_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(comment_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新评论失败: {e}")))?;

        Ok(Some(result.into_comment()))
    }

    /// 删除评论
    pub async fn delete_comment_impl(&self, comment_id: i64) -> Result<bool> {
        let result = Comments::delete_by_id(comment_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除评论失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
