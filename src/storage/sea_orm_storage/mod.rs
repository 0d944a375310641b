//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod comments;
mod course_members;
mod courses;
mod hometasks;
mod homeworks;
mod lectures;
mod users;

use crate::config::AppConfig;
use crate::errors::{CourseHubError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CourseHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CourseHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CourseHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    comments::{
        entities::Comment,
        requests::{CommentListQuery, CreateCommentRequest, UpdateCommentRequest},
        responses::CommentListResponse,
    },
    course_members::entities::{CourseMember, CourseRole},
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    hometasks::{
        entities::Hometask,
        requests::{CreateHometaskRequest, HometaskListQuery, UpdateHometaskRequest},
        responses::HometaskListResponse,
    },
    homeworks::{
        entities::Homework,
        requests::{CreateHomeworkRequest, HomeworkListQuery, UpdateHomeworkRequest},
        responses::HomeworkListResponse,
    },
    lectures::{
        entities::Lecture,
        requests::{CreateLectureRequest, LectureListQuery, UpdateLectureRequest},
        responses::LectureListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        self.get_users_by_ids_impl(ids).await
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>> {
        self.update_profile_impl(id, update).await
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_password_impl(id, password_hash).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_by_slug(&self, slug: &str) -> Result<Option<Course>> {
        self.get_course_by_slug_impl(slug).await
    }

    async fn list_courses_for_user(
        &self,
        user_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_for_user_impl(user_id, query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 名册模块
    async fn get_course_member(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<CourseMember>> {
        self.get_course_member_impl(user_id, course_id).await
    }

    async fn is_course_member_with_role(
        &self,
        user_id: i64,
        course_id: i64,
        role: CourseRole,
    ) -> Result<bool> {
        self.is_course_member_with_role_impl(user_id, course_id, role)
            .await
    }

    async fn list_course_members(
        &self,
        course_id: i64,
        role: CourseRole,
    ) -> Result<Vec<CourseMember>> {
        self.list_course_members_impl(course_id, role).await
    }

    async fn add_course_member(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<CourseMember> {
        self.add_course_member_impl(course_id, user_id, role).await
    }

    async fn remove_course_member(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<bool> {
        self.remove_course_member_impl(course_id, user_id, role)
            .await
    }

    // 讲义模块
    async fn create_lecture(
        &self,
        course_id: i64,
        lecture: CreateLectureRequest,
    ) -> Result<Lecture> {
        self.create_lecture_impl(course_id, lecture).await
    }

    async fn get_lecture_by_id(&self, lecture_id: i64) -> Result<Option<Lecture>> {
        self.get_lecture_by_id_impl(lecture_id).await
    }

    async fn list_lectures(
        &self,
        course_id: i64,
        query: LectureListQuery,
    ) -> Result<LectureListResponse> {
        self.list_lectures_impl(course_id, query).await
    }

    async fn update_lecture(
        &self,
        lecture_id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<Lecture>> {
        self.update_lecture_impl(lecture_id, update).await
    }

    async fn delete_lecture(&self, lecture_id: i64) -> Result<bool> {
        self.delete_lecture_impl(lecture_id).await
    }

    // 课后任务模块
    async fn create_hometask(
        &self,
        lecture_id: i64,
        hometask: CreateHometaskRequest,
    ) -> Result<Hometask> {
        self.create_hometask_impl(lecture_id, hometask).await
    }

    async fn get_hometask_by_id(&self, hometask_id: i64) -> Result<Option<Hometask>> {
        self.get_hometask_by_id_impl(hometask_id).await
    }

    async fn list_hometasks(
        &self,
        lecture_id: i64,
        query: HometaskListQuery,
    ) -> Result<HometaskListResponse> {
        self.list_hometasks_impl(lecture_id, query).await
    }

    async fn update_hometask(
        &self,
        hometask_id: i64,
        update: UpdateHometaskRequest,
    ) -> Result<Option<Hometask>> {
        self.update_hometask_impl(hometask_id, update).await
    }

    async fn delete_hometask(&self, hometask_id: i64) -> Result<bool> {
        self.delete_hometask_impl(hometask_id).await
    }

    // 作业提交模块
    async fn create_homework(
        &self,
        hometask_id: i64,
        student_id: i64,
        homework: CreateHomeworkRequest,
    ) -> Result<Homework> {
        self.create_homework_impl(hometask_id, student_id, homework)
            .await
    }

    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(homework_id).await
    }

    async fn list_homeworks(
        &self,
        hometask_id: i64,
        student_filter: Option<i64>,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse> {
        self.list_homeworks_impl(hometask_id, student_filter, query)
            .await
    }

    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>> {
        self.update_homework_impl(homework_id, update).await
    }

    async fn set_homework_mark(&self, homework_id: i64, mark: i64) -> Result<Option<Homework>> {
        self.set_homework_mark_impl(homework_id, mark).await
    }

    async fn delete_homework(&self, homework_id: i64) -> Result<bool> {
        self.delete_homework_impl(homework_id).await
    }

    // 评论模块
    async fn create_comment(
        &self,
        homework_id: i64,
        owner_id: i64,
        comment: CreateCommentRequest,
    ) -> Result<Comment> {
        self.create_comment_impl(homework_id, owner_id, comment)
            .await
    }

    async fn get_comment_by_id(&self, comment_id: i64) -> Result<Option<Comment>> {
        self.get_comment_by_id_impl(comment_id).await
    }

    async fn list_comments(
        &self,
        homework_id: i64,
        query: CommentListQuery,
    ) -> Result<CommentListResponse> {
        self.list_comments_impl(homework_id, query).await
    }

    async fn update_comment(
        &self,
        comment_id: i64,
        update: UpdateCommentRequest,
    ) -> Result<Option<Comment>> {
        self.update_comment_impl(comment_id, update).await
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<bool> {
        self.delete_comment_impl(comment_id).await
    }
}
