use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Invalid slug regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 课程 slug 校验：小写字母、数字、单个连字符分隔
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() || slug.len() > 50 {
        return Err("Slug length must be between 1 and 50 characters");
    }
    if !SLUG_RE.is_match(slug) {
        return Err("Slug must contain only lowercase letters, numbers and hyphens");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("al").is_err());
        assert!(validate_username("alice bob").is_err());
        assert!(validate_username("a-very-long-username-over-limit").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("algo").is_ok());
        assert!(validate_slug("intro-to-rust-2").is_ok());
        assert!(validate_slug("Algo").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abcdef12").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("ALLUPPERCASE1").is_err());
        assert!(validate_password("NoDigitsHere").is_err());
    }
}
