//! 权限决策表
//!
//! 每条规则是若干角色谓词的 OR 组合。读操作取两种身份中更宽松的
//! 一条；写操作是严格的单角色匹配。对象级校验（作业归属、评论
//! 归属）不在表内，由各服务在查到目标对象后补充执行。

use super::CourseMembership;

/// 受权限保护的资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Course,
    Roster,
    Lecture,
    Hometask,
    Homework,
    Comment,
}

/// 资源上的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    List,
    Retrieve,
    Update,
    Delete,
    /// 作业评分（读/写共用同一规则，教师专属）
    Mark,
}

/// 角色谓词，对照名册身份逐条判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolePredicate {
    /// 任何已认证用户（JWT 中间件保证认证已通过）
    Authenticated,
    /// 该课程的教师
    Teacher,
    /// 该课程的学生
    Student,
}

impl RolePredicate {
    fn holds(&self, membership: &CourseMembership) -> bool {
        match self {
            RolePredicate::Authenticated => true,
            RolePredicate::Teacher => membership.is_teacher,
            RolePredicate::Student => membership.is_student,
        }
    }
}

/// 一条访问规则：谓词列表中任意一条成立即放行
#[derive(Debug, Clone, Copy)]
pub struct AccessRule(&'static [RolePredicate]);

impl AccessRule {
    pub const DENY: AccessRule = AccessRule(&[]);
    pub const AUTHENTICATED: AccessRule = AccessRule(&[RolePredicate::Authenticated]);
    pub const TEACHER: AccessRule = AccessRule(&[RolePredicate::Teacher]);
    pub const STUDENT: AccessRule = AccessRule(&[RolePredicate::Student]);
    pub const TEACHER_OR_STUDENT: AccessRule =
        AccessRule(&[RolePredicate::Teacher, RolePredicate::Student]);

    pub fn permits(&self, membership: &CourseMembership) -> bool {
        self.0.iter().any(|p| p.holds(membership))
    }
}

/// 决策表本体
///
/// 作业与评论的 Create/Update/Delete 在此只做角色闸门，归属校验
/// （学生只能动自己的提交、评论只能由所有者改删）由服务层叠加。
pub fn rule_for(resource: Resource, action: Action) -> AccessRule {
    match (resource, action) {
        // 课程：任何人可建（建课者自动入教师名册），成员可读，教师可改删
        (Resource::Course, Action::Create) => AccessRule::AUTHENTICATED,
        (Resource::Course, Action::List | Action::Retrieve) => AccessRule::TEACHER_OR_STUDENT,
        (Resource::Course, Action::Update | Action::Delete) => AccessRule::TEACHER,

        // 名册：全部操作教师专属
        (Resource::Roster, _) => AccessRule::TEACHER,

        // 讲义与课后任务：教师写，成员读
        (Resource::Lecture | Resource::Hometask, Action::Create) => AccessRule::TEACHER,
        (Resource::Lecture | Resource::Hometask, Action::List | Action::Retrieve) => {
            AccessRule::TEACHER_OR_STUDENT
        }
        (Resource::Lecture | Resource::Hometask, Action::Update | Action::Delete) => {
            AccessRule::TEACHER
        }

        // 作业：学生提交，成员可读（学生读取范围由查询限定到本人），
        // 改删仅限学生（所有者校验在服务层），评分教师专属
        (Resource::Homework, Action::Create) => AccessRule::STUDENT,
        (Resource::Homework, Action::List | Action::Retrieve) => AccessRule::TEACHER_OR_STUDENT,
        (Resource::Homework, Action::Update | Action::Delete) => AccessRule::STUDENT,
        (Resource::Homework, Action::Mark) => AccessRule::TEACHER,

        // 评论：教师或作业所有者可建（所有者校验在服务层），成员可读，
        // 改删仅限评论所有者（同样在服务层校验归属）
        (Resource::Comment, Action::Create) => AccessRule::TEACHER_OR_STUDENT,
        (Resource::Comment, Action::List | Action::Retrieve) => AccessRule::TEACHER_OR_STUDENT,
        (Resource::Comment, Action::Update | Action::Delete) => AccessRule::TEACHER_OR_STUDENT,

        // 评分操作对其他资源无意义
        (_, Action::Mark) => AccessRule::DENY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: CourseMembership = CourseMembership {
        is_teacher: false,
        is_student: false,
    };
    const TEACHER: CourseMembership = CourseMembership {
        is_teacher: true,
        is_student: false,
    };
    const STUDENT: CourseMembership = CourseMembership {
        is_teacher: false,
        is_student: true,
    };

    #[test]
    fn test_course_rules() {
        // 任何已认证用户都可以创建课程
        assert!(rule_for(Resource::Course, Action::Create).permits(&NONE));

        // 成员可读，非成员拒绝而非空结果
        assert!(rule_for(Resource::Course, Action::Retrieve).permits(&TEACHER));
        assert!(rule_for(Resource::Course, Action::Retrieve).permits(&STUDENT));
        assert!(!rule_for(Resource::Course, Action::Retrieve).permits(&NONE));

        // 改删仅限教师
        assert!(rule_for(Resource::Course, Action::Update).permits(&TEACHER));
        assert!(!rule_for(Resource::Course, Action::Update).permits(&STUDENT));
        assert!(!rule_for(Resource::Course, Action::Delete).permits(&STUDENT));
    }

    #[test]
    fn test_roster_rules_teacher_only() {
        for action in [Action::List, Action::Create, Action::Delete] {
            assert!(rule_for(Resource::Roster, action).permits(&TEACHER));
            assert!(!rule_for(Resource::Roster, action).permits(&STUDENT));
            assert!(!rule_for(Resource::Roster, action).permits(&NONE));
        }
    }

    #[test]
    fn test_lecture_hometask_rules() {
        for resource in [Resource::Lecture, Resource::Hometask] {
            assert!(rule_for(resource, Action::Create).permits(&TEACHER));
            assert!(!rule_for(resource, Action::Create).permits(&STUDENT));

            assert!(rule_for(resource, Action::List).permits(&TEACHER));
            assert!(rule_for(resource, Action::List).permits(&STUDENT));
            assert!(!rule_for(resource, Action::Retrieve).permits(&NONE));

            assert!(rule_for(resource, Action::Update).permits(&TEACHER));
            assert!(!rule_for(resource, Action::Delete).permits(&STUDENT));
        }
    }

    #[test]
    fn test_homework_rules() {
        // 只有学生能提交作业
        assert!(rule_for(Resource::Homework, Action::Create).permits(&STUDENT));
        assert!(!rule_for(Resource::Homework, Action::Create).permits(&TEACHER));

        // 成员可读
        assert!(rule_for(Resource::Homework, Action::List).permits(&TEACHER));
        assert!(rule_for(Resource::Homework, Action::List).permits(&STUDENT));

        // 教师不能修改学生提交
        assert!(rule_for(Resource::Homework, Action::Update).permits(&STUDENT));
        assert!(!rule_for(Resource::Homework, Action::Update).permits(&TEACHER));

        // 评分是独立操作，教师专属
        assert!(rule_for(Resource::Homework, Action::Mark).permits(&TEACHER));
        assert!(!rule_for(Resource::Homework, Action::Mark).permits(&STUDENT));
    }

    #[test]
    fn test_comment_rules() {
        assert!(rule_for(Resource::Comment, Action::Create).permits(&TEACHER));
        assert!(rule_for(Resource::Comment, Action::Create).permits(&STUDENT));
        assert!(!rule_for(Resource::Comment, Action::Create).permits(&NONE));

        assert!(rule_for(Resource::Comment, Action::Update).permits(&STUDENT));
        assert!(!rule_for(Resource::Comment, Action::Delete).permits(&NONE));
    }

    #[test]
    fn test_mark_meaningless_on_other_resources() {
        assert!(!rule_for(Resource::Course, Action::Mark).permits(&TEACHER));
        assert!(!rule_for(Resource::Comment, Action::Mark).permits(&TEACHER));
    }

    #[test]
    fn test_both_roles_evaluated_independently() {
        // 名册校验保证互斥，但判定逻辑不依赖这一点
        let both = CourseMembership {
            is_teacher: true,
            is_student: true,
        };
        assert!(rule_for(Resource::Course, Action::Retrieve).permits(&both));
        assert!(rule_for(Resource::Course, Action::Update).permits(&both));
        assert!(rule_for(Resource::Homework, Action::Create).permits(&both));
    }
}
