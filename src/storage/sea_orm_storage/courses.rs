//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::course_members::{Column as MemberColumn, Entity as CourseMembers};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            slug: Set(req.slug),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过 slug 获取课程
    pub async fn get_course_by_slug_impl(&self, slug: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出用户所在的课程
    ///
    /// 列表范围限定为该用户名册内的课程，无论教师还是学生身份。
    pub async fn list_courses_for_user_impl(
        &self,
        user_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        // 查询用户所属课程 ID
        let member_records = CourseMembers::find()
            .filter(MemberColumn::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程成员关系失败: {e}")))?;

        let course_ids: Vec<i64> = member_records.iter().map(|m| m.course_id).collect();

        if course_ids.is_empty() {
            return Ok(CourseListResponse {
                items: vec![],
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let mut select = Courses::find().filter(Column::Id.is_in(course_ids));

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_course()))
    }

    /// 删除课程（级联删除讲义、任务、作业、评论与名册）
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
