use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
//
// 注意：令牌里没有角色信息。教师/学生身份是课程维度的名册关系，
// 每次请求由授权层按课程实时解析。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub token_type: String, // token类型: "access" 或 "refresh"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

// Token 响应结构体
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token
    pub fn generate_access_token(user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user_id,
            "access",
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成 Refresh Token
    pub fn generate_refresh_token(user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user_id,
            "refresh",
            chrono::Duration::days(config.jwt.refresh_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        user_id: i64,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 生成完整的 Token 响应（包含 access 和 refresh token）
    pub fn generate_token_pair(user_id: i64) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let access_token = Self::generate_access_token(user_id)?;
        let refresh_token = Self::generate_refresh_token(user_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    // 解码 Token（不区分类型）
    pub fn decode_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|data| data.claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, String> {
        let claims = Self::decode_token(token).map_err(|e| e.to_string())?;
        if claims.token_type != "access" {
            return Err("Not an access token".to_string());
        }
        Ok(claims)
    }

    // 验证 Refresh Token
    pub fn verify_refresh_token(token: &str) -> Result<Claims, String> {
        let claims = Self::decode_token(token).map_err(|e| e.to_string())?;
        if claims.token_type != "refresh" {
            return Err("Not a refresh token".to_string());
        }
        Ok(claims)
    }
}
