use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::auth::requests::RefreshTokenRequest;
use crate::models::auth::responses::{RefreshTokenResponse, UserInfoResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    refresh_request: RefreshTokenRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 验证 refresh token 并生成新的 access token
    match JwtUtils::verify_refresh_token(&refresh_request.refresh_token) {
        Ok(claims) => match claims.sub.parse::<i64>() {
            Ok(user_id) => match JwtUtils::generate_access_token(user_id) {
                Ok(new_access_token) => {
                    let response = RefreshTokenResponse {
                        access_token: new_access_token,
                        expires_in: config.jwt.access_token_expiry * 60,
                    };
                    Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Token refreshed successfully",
                    )))
                }
                Err(e) => {
                    tracing::error!("Failed to generate access token: {}", e);
                    Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Token refresh failed",
                        )),
                    )
                }
            },
            Err(_) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::InvalidToken,
                "Invalid refresh token",
            ))),
        },
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::InvalidToken,
                "Login expired or invalid, please login again",
            )))
        }
    }
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
