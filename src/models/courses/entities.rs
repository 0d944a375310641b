use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 课程唯一标识（用于 URL）
    pub slug: String,
    // 课程描述
    pub description: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
