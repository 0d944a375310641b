use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hometask {
    pub id: i64,
    pub lecture_id: i64,
    // 任务描述
    pub text: String,
    // 该任务可得的最高分
    pub max_mark: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
