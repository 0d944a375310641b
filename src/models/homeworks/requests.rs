use serde::Deserialize;

// 创建作业提交请求。hometask_id 与 student_id 均取自请求上下文，
// 请求体里提供的同名字段不会生效。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHomeworkRequest {
    pub file_token: String,
}

// 更新作业提交请求。hometask/student 归属关系不可变，mark 只能
// 通过评分接口修改。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHomeworkRequest {
    pub file_token: Option<String>,
}

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct SetMarkRequest {
    pub mark: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeworkListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_homework_drops_linkage_and_mark_fields() {
        // 归属与分值字段不在更新模型里，反序列化阶段直接丢弃
        let parsed: UpdateHomeworkRequest = serde_json::from_str(
            r#"{"file_token":"ft-2","student_id":99,"hometask_id":7,"mark":100}"#,
        )
        .expect("deserialize update payload");

        assert_eq!(parsed.file_token.as_deref(), Some("ft-2"));
    }
}
