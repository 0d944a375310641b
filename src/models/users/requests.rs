use serde::Deserialize;

// 注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_name: Option<String>,
}

// 更新个人资料请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub profile_name: Option<String>,
    pub email: Option<String>,
}

// 修改密码请求
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
