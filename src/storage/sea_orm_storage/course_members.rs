//! 课程名册存储操作

use super::SeaOrmStorage;
use crate::entity::course_members::{ActiveModel, Column, Entity as CourseMembers};
use crate::errors::{CourseHubError, Result};
use crate::models::course_members::entities::{CourseMember, CourseRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};

impl SeaOrmStorage {
    /// 获取用户在课程中的成员记录
    pub async fn get_course_member_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<CourseMember>> {
        let result = CourseMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::CourseId.eq(course_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程成员失败: {e}")))?;

        Ok(result.map(|m| m.into_course_member()))
    }

    /// 判断用户是否以指定角色在课程名册中
    ///
    /// 教师测试与学生测试各自独立调用一次，互不依赖。
    pub async fn is_course_member_with_role_impl(
        &self,
        user_id: i64,
        course_id: i64,
        role: CourseRole,
    ) -> Result<bool> {
        let count = CourseMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::CourseId.eq(course_id))
                    .add(Column::Role.eq(role.to_string())),
            )
            .count(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程成员失败: {e}")))?;

        Ok(count > 0)
    }

    /// 列出课程内指定角色的全部成员
    pub async fn list_course_members_impl(
        &self,
        course_id: i64,
        role: CourseRole,
    ) -> Result<Vec<CourseMember>> {
        let result = CourseMembers::find()
            .filter(
                Condition::all()
                    .add(Column::CourseId.eq(course_id))
                    .add(Column::Role.eq(role.to_string())),
            )
            .order_by_asc(Column::JoinedAt)
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询课程名册失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course_member()).collect())
    }

    /// 把用户以指定角色加入课程名册
    ///
    /// 已持有该角色时直接返回现有记录，保证重复添加幂等。
    pub async fn add_course_member_impl(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<CourseMember> {
        if let Some(existing) = self.get_course_member_impl(user_id, course_id).await?
            && existing.role == role
        {
            return Ok(existing);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = match model.insert(&self.db).await {
            Ok(inserted) => inserted,
            // 并发添加同一用户时唯一索引会拦下后到的插入，按幂等语义回读已有记录
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return match self.get_course_member_impl(user_id, course_id).await? {
                    Some(existing) if existing.role == role => Ok(existing),
                    _ => Err(CourseHubError::database_operation(format!(
                        "加入课程名册失败: {e}"
                    ))),
                };
            }
            Err(e) => {
                return Err(CourseHubError::database_operation(format!(
                    "加入课程名册失败: {e}"
                )));
            }
        };

        Ok(result.into_course_member())
    }

    /// 把用户从课程名册中以指定角色移除
    pub async fn remove_course_member_impl(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<bool> {
        let result = CourseMembers::delete_many()
            .filter(
                Condition::all()
                    .add(Column::CourseId.eq(course_id))
                    .add(Column::UserId.eq(user_id))
                    .add(Column::Role.eq(role.to_string())),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("移出课程名册失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{courses, users};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    // In-memory sqlite 必须限制为单连接，否则每个池连接各有一份数据库
    async fn memory_storage() -> SeaOrmStorage {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts)
            .await
            .expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage { db }
    }

    async fn seed_course_and_user(storage: &SeaOrmStorage) -> (i64, i64) {
        let now = chrono::Utc::now().timestamp();

        let user = users::ActiveModel {
            username: Set("alice".to_string()),
            email: Set("alice@example.com".to_string()),
            password_hash: Set("hash".to_string()),
            status: Set("active".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .expect("insert user");

        let course = courses::ActiveModel {
            name: Set("Rust 101".to_string()),
            slug: Set("rust-101".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .expect("insert course");

        (course.id, user.id)
    }

    #[tokio::test]
    async fn test_add_course_member_repeat_is_noop() {
        let storage = memory_storage().await;
        let (course_id, user_id) = seed_course_and_user(&storage).await;

        let first = storage
            .add_course_member_impl(course_id, user_id, CourseRole::Student)
            .await
            .expect("first add");
        let second = storage
            .add_course_member_impl(course_id, user_id, CourseRole::Student)
            .await
            .expect("repeat add");

        assert_eq!(first.id, second.id);
        assert_eq!(second.role, CourseRole::Student);
    }

    #[tokio::test]
    async fn test_concurrent_add_same_member_never_errors() {
        let storage = memory_storage().await;
        let (course_id, user_id) = seed_course_and_user(&storage).await;

        // 两个添加同时竞争同一条唯一索引，落败方也要拿到已有记录
        let (a, b) = tokio::join!(
            storage.add_course_member_impl(course_id, user_id, CourseRole::Teacher),
            storage.add_course_member_impl(course_id, user_id, CourseRole::Teacher),
        );

        let a = a.expect("concurrent add a");
        let b = b.expect("concurrent add b");
        assert_eq!(a.id, b.id);
        assert_eq!(a.role, CourseRole::Teacher);
    }
}
