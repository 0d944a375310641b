use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

// 更新课程请求
//
// 名册（teachers/students）不在此请求中：名册只能通过专用的
// roster 接口增量修改，请求体里出现的同名字段会被直接忽略。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

// 课程列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
