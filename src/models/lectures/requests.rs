use serde::Deserialize;

// 创建讲义请求。course_id 取自路径，不在请求体中。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLectureRequest {
    pub name: String,
    pub file_token: String,
}

// 更新讲义请求。course 归属关系创建后不可变。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLectureRequest {
    pub name: Option<String>,
    pub file_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LectureListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
