use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{LoginRequest, RefreshTokenRequest};
use crate::models::users::requests::{
    ChangePasswordRequest, CreateUserRequest, UpdateProfileRequest,
};
use crate::services::AuthService;

// 懒加载的全局 AUTH_SERVICE 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn register(
    req: HttpRequest,
    create_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(create_data.into_inner(), &req).await
}

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn refresh_token(
    refresh_data: web::Json<RefreshTokenRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(refresh_data.into_inner()).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn get_me(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&req).await
}

pub async fn update_profile(
    req: HttpRequest,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .update_profile(update_data.into_inner(), &req)
        .await
}

pub async fn change_password(
    req: HttpRequest,
    change_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .change_password(change_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(web::resource("/register").route(web::post().to(register)))
            .service(web::resource("/login").route(web::post().to(login)))
            .service(web::resource("/token/refresh").route(web::post().to(refresh_token)))
            .service(web::resource("/logout").route(web::post().to(logout)))
            .service(
                web::scope("/me")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::resource("")
                            .route(web::get().to(get_me))
                            .route(web::put().to(update_profile)),
                    )
                    .service(web::resource("/password").route(web::put().to(change_password))),
            ),
    );
}
