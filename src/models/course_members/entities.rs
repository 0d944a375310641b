use serde::{Deserialize, Serialize};

// 课程内角色
//
// 同一用户在不同课程中可以是不同角色；校验规则保证同一课程内
// 不会同时出现在教师和学生两份名册里。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseRole {
    Teacher, // 教师
    Student, // 学生
}

impl CourseRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl<'de> Deserialize<'de> for CourseRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CourseRole::TEACHER => Ok(CourseRole::Teacher),
            CourseRole::STUDENT => Ok(CourseRole::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的课程角色: '{s}'. 支持的角色: teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Teacher => write!(f, "{}", CourseRole::TEACHER),
            CourseRole::Student => write!(f, "{}", CourseRole::STUDENT),
        }
    }
}

impl std::str::FromStr for CourseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(CourseRole::Teacher),
            "student" => Ok(CourseRole::Student),
            _ => Err(format!("Invalid course role: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMember {
    pub id: i64,
    pub course_id: i64,
    pub user_id: i64,
    pub role: CourseRole,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_role_roundtrip() {
        assert_eq!("teacher".parse::<CourseRole>().unwrap(), CourseRole::Teacher);
        assert_eq!(CourseRole::Student.to_string(), "student");
        assert!("admin".parse::<CourseRole>().is_err());
    }
}
