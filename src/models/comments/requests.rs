use serde::Deserialize;

// 创建评论请求。homework_id 与 owner_id 取自请求上下文。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

// 更新评论请求。homework/owner 归属关系不可变。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_comment_drops_linkage_fields() {
        let parsed: UpdateCommentRequest =
            serde_json::from_str(r#"{"text":"updated","owner_id":99,"homework_id":7}"#)
                .expect("deserialize update payload");

        assert_eq!(parsed.text.as_deref(), Some("updated"));
    }
}
