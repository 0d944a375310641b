//! 课程权限模块
//!
//! 教师/学生身份不是用户的全局属性，而是相对每门课程的名册成员
//! 关系。所有权限判定先通过 [`CourseMembership`] 解析身份，再交给
//! [`rules`] 中的决策表。

mod rules;

pub use rules::{AccessRule, Action, Resource, RolePredicate};

use crate::errors::Result;
use crate::models::course_members::entities::CourseRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use actix_web::HttpResponse;
use std::sync::Arc;

/// 用户在某门课程中的名册身份
///
/// 教师测试与学生测试各自独立执行并分别记录，判定规则对两者做
/// OR 或单角色匹配，不假定两者互斥（互斥由名册校验保证）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseMembership {
    pub is_teacher: bool,
    pub is_student: bool,
}

impl CourseMembership {
    /// 解析用户在课程中的身份
    pub async fn resolve(
        storage: &Arc<dyn Storage>,
        user_id: i64,
        course_id: i64,
    ) -> Result<Self> {
        let is_teacher = storage
            .is_course_member_with_role(user_id, course_id, CourseRole::Teacher)
            .await?;
        let is_student = storage
            .is_course_member_with_role(user_id, course_id, CourseRole::Student)
            .await?;

        Ok(Self {
            is_teacher,
            is_student,
        })
    }

    /// 是否为课程成员（教师或学生）
    pub fn is_member(&self) -> bool {
        self.is_teacher || self.is_student
    }
}

/// 按决策表校验操作权限，拒绝时返回 403 响应
pub fn ensure_permitted(
    membership: &CourseMembership,
    resource: Resource,
    action: Action,
) -> std::result::Result<(), HttpResponse> {
    if rules::rule_for(resource, action).permits(membership) {
        Ok(())
    } else {
        Err(forbidden_response())
    }
}

/// 统一的 403 响应体
pub fn forbidden_response() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::CoursePermissionDenied,
        "Permission denied for this course",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_member() {
        let none = CourseMembership::default();
        assert!(!none.is_member());

        let teacher = CourseMembership {
            is_teacher: true,
            is_student: false,
        };
        assert!(teacher.is_member());

        let student = CourseMembership {
            is_teacher: false,
            is_student: true,
        };
        assert!(student.is_member());
    }

    #[test]
    fn test_ensure_permitted_denies_non_member() {
        let none = CourseMembership::default();
        assert!(ensure_permitted(&none, Resource::Course, Action::Retrieve).is_err());
        assert!(ensure_permitted(&none, Resource::Lecture, Action::List).is_err());
    }

    #[test]
    fn test_ensure_permitted_allows_member_read() {
        let student = CourseMembership {
            is_teacher: false,
            is_student: true,
        };
        assert!(ensure_permitted(&student, Resource::Course, Action::Retrieve).is_ok());
        assert!(ensure_permitted(&student, Resource::Hometask, Action::List).is_ok());
    }
}
