use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 根据用户名或邮箱获取用户信息
    match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => {
            // 验证密码
            if verify_password(&login_request.password, &user.password_hash) {
                // 更新最后登录时间
                let _ = storage.update_last_login(user.id).await;

                // 生成令牌对
                match JwtUtils::generate_token_pair(user.id) {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in successfully", user.username);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            refresh_token: token_pair.refresh_token,
                            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                            user,
                            created_at: chrono::Utc::now(),
                        };

                        Ok(HttpResponse::Ok()
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Username or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Username or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
