use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::users::requests::{ChangePasswordRequest, UpdateProfileRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::{validate_email, validate_password};

use super::AuthService;

pub async fn handle_update_profile(
    service: &AuthService,
    update_request: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if let Some(ref email) = update_request.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }

        // 换绑邮箱前确认没被别人占用
        match storage.get_user_by_email(email).await {
            Ok(Some(existing)) if existing.id != uid => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserEmailAlreadyExists,
                    "Email already exists",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check email: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_profile(uid, update_request).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            user,
            "Profile updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Profile update failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 缓存中的用户不含密码哈希，校验旧密码必须读库
    let user = match storage.get_user_by_id(uid).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load user: {e}"),
                )),
            );
        }
    };

    if !verify_password(&change_request.old_password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Old password is incorrect",
        )));
    }

    if let Err(msg) = validate_password(&change_request.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordTooWeak, msg)));
    }

    let password_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    match storage.update_password(user.id, &password_hash).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_empty("Password changed successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Password change failed: {e}"),
            )),
        ),
    }
}
