pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录验证
    pub async fn login(
        &self,
        login_request: crate::models::auth::requests::LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 用户注册
    pub async fn register(
        &self,
        create_request: crate::models::users::requests::CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, create_request, request).await
    }

    // 刷新令牌
    pub async fn refresh_token(
        &self,
        refresh_request: crate::models::auth::requests::RefreshTokenRequest,
    ) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, refresh_request).await
    }

    // 登出，清除令牌缓存
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(request).await
    }

    // 获取当前用户信息
    pub async fn get_user(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_get_user(self, request).await
    }

    // 更新个人资料
    pub async fn update_profile(
        &self,
        update_request: crate::models::users::requests::UpdateProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_update_profile(self, update_request, request).await
    }

    // 修改密码
    pub async fn change_password(
        &self,
        change_request: crate::models::users::requests::ChangePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_change_password(self, change_request, request).await
    }
}
