use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::ApiResponse;

/// 处理用户登出
/// 清除令牌对应的用户缓存条目，令 access token 立即失效于缓存层
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    if let Some(token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        && let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
    {
        cache.get_ref().remove(&format!("user:{token}")).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Logged out successfully")))
}
