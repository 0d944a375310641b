use serde::Deserialize;

fn default_max_mark() -> i64 {
    10
}

// 创建课后任务请求。lecture_id 取自路径。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHometaskRequest {
    pub text: String,
    #[serde(default = "default_max_mark")]
    pub max_mark: i64,
}

// 更新课后任务请求。lecture 归属关系创建后不可变。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHometaskRequest {
    pub text: Option<String>,
    pub max_mark: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HometaskListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
