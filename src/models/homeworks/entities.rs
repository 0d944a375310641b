use serde::{Deserialize, Serialize};

// 学生提交的作业
//
// 同一学生可以对同一任务多次提交，历史全部保留；列表按提交时间
// 倒序返回。mark 在教师评分前为空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    pub id: i64,
    pub hometask_id: i64,
    pub student_id: i64,
    pub file_token: String,
    pub mark: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
