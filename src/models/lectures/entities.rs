use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    // 讲义文件的不透明引用，文件内容由外部存储负责
    pub file_token: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
