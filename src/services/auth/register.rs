use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::notifications::Notifier;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    mut create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 验证用户名合法性
    if let Err(msg) = validate_username(&create_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&create_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 验证密码强度
    if let Err(msg) = validate_password(&create_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordTooWeak, msg)));
    }

    // 检查用户名是否已存在
    if let Err(response) = check_username_exists(&storage, &create_request.username).await {
        return Ok(response);
    }

    // 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &create_request.email).await {
        return Ok(response);
    }

    // 哈希密码
    match hash_password(&create_request.password) {
        Ok(password_hash) => {
            create_request.password = password_hash;

            match storage.create_user(create_request).await {
                Ok(user) => {
                    // 欢迎邮件异步投递，失败不影响注册结果
                    if let Err(e) = Notifier::enqueue_welcome_email(&user.username, &user.email) {
                        warn!("Failed to enqueue welcome email for {}: {}", user.email, e);
                    }

                    Ok(HttpResponse::Created()
                        .json(ApiResponse::success(user, "Registered successfully")))
                }
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("Register failed: {e}"),
                    )),
                ),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Password hashing failed: {e}"),
            )),
        ),
    }
}

async fn check_username_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    username: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_username(username).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserNameAlreadyExists,
            "Username already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}
