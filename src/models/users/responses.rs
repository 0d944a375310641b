use serde::Serialize;

use super::entities::User;

// 公开的用户信息（名册、评论等处引用）
#[derive(Debug, Clone, Serialize)]
pub struct UserBrief {
    pub id: i64,
    pub username: String,
    pub profile_name: Option<String>,
}

impl From<&User> for UserBrief {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            profile_name: user.profile_name.clone(),
        }
    }
}
