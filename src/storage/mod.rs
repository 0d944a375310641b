use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段已经是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 批量获取用户（名册展示与校验）
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>>;
    // 更新个人资料
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>>;
    // 更新密码哈希
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 通过 slug 获取课程信息
    async fn get_course_by_slug(&self, slug: &str) -> Result<Option<Course>>;
    // 列出用户作为教师或学生所在的课程
    async fn list_courses_for_user(
        &self,
        user_id: i64,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程（级联删除所有下级资源）
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 名册管理方法
    // 获取用户在课程中的成员记录
    async fn get_course_member(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<CourseMember>>;
    // 判断用户是否以指定角色在册（教师/学生两项分别独立查询）
    async fn is_course_member_with_role(
        &self,
        user_id: i64,
        course_id: i64,
        role: CourseRole,
    ) -> Result<bool>;
    // 列出课程中指定角色的所有成员
    async fn list_course_members(
        &self,
        course_id: i64,
        role: CourseRole,
    ) -> Result<Vec<CourseMember>>;
    // 将用户以指定角色加入名册（已在册则 no-op，返回现有记录）
    async fn add_course_member(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<CourseMember>;
    // 将用户以指定角色从名册移除（不在册则 no-op）
    async fn remove_course_member(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<bool>;

    /// 讲义管理方法
    async fn create_lecture(
        &self,
        course_id: i64,
        lecture: CreateLectureRequest,
    ) -> Result<Lecture>;
    async fn get_lecture_by_id(&self, lecture_id: i64) -> Result<Option<Lecture>>;
    async fn list_lectures(
        &self,
        course_id: i64,
        query: LectureListQuery,
    ) -> Result<LectureListResponse>;
    async fn update_lecture(
        &self,
        lecture_id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<Lecture>>;
    async fn delete_lecture(&self, lecture_id: i64) -> Result<bool>;

    /// 课后任务管理方法
    async fn create_hometask(
        &self,
        lecture_id: i64,
        hometask: CreateHometaskRequest,
    ) -> Result<Hometask>;
    async fn get_hometask_by_id(&self, hometask_id: i64) -> Result<Option<Hometask>>;
    async fn list_hometasks(
        &self,
        lecture_id: i64,
        query: HometaskListQuery,
    ) -> Result<HometaskListResponse>;
    async fn update_hometask(
        &self,
        hometask_id: i64,
        update: UpdateHometaskRequest,
    ) -> Result<Option<Hometask>>;
    async fn delete_hometask(&self, hometask_id: i64) -> Result<bool>;

    /// 作业提交管理方法
    // 创建提交；student_id 由服务层从请求上下文确定
    async fn create_homework(
        &self,
        hometask_id: i64,
        student_id: i64,
        homework: CreateHomeworkRequest,
    ) -> Result<Homework>;
    async fn get_homework_by_id(&self, homework_id: i64) -> Result<Option<Homework>>;
    // 列出提交；student_filter 为 Some 时只看该学生的提交历史。
    // 排序：最新提交在前。
    async fn list_homeworks(
        &self,
        hometask_id: i64,
        student_filter: Option<i64>,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse>;
    async fn update_homework(
        &self,
        homework_id: i64,
        update: UpdateHomeworkRequest,
    ) -> Result<Option<Homework>>;
    // 评分是独立于普通更新的操作
    async fn set_homework_mark(&self, homework_id: i64, mark: i64) -> Result<Option<Homework>>;
    async fn delete_homework(&self, homework_id: i64) -> Result<bool>;

    /// 评论管理方法
    async fn create_comment(
        &self,
        homework_id: i64,
        owner_id: i64,
        comment: CreateCommentRequest,
    ) -> Result<Comment>;
    async fn get_comment_by_id(&self, comment_id: i64) -> Result<Option<Comment>>;
    async fn list_comments(
        &self,
        homework_id: i64,
        query: CommentListQuery,
    ) -> Result<CommentListResponse>;
    async fn update_comment(
        &self,
        comment_id: i64,
        update: UpdateCommentRequest,
    ) -> Result<Option<Comment>>;
    async fn delete_comment(&self, comment_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
