use serde::{Deserialize, Serialize};
use sys_locale::get_locale;

/// 기본 로케일. 어떤 경로로도 결정되지 않으면 사용한다.
pub const DEFAULT_LOCALE: &str = "en-us";

/// 정수부 자릿수 묶음 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// 1,234,567
    Western,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// CLI 플래그/설정/시스템 순으로 로케일을 결정한다.
pub fn resolve_locale(cli_arg: Option<&str>, config_locale: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_locale)
        .or_else(|| config_locale.and_then(normalize_locale))
        .or_else(detect_system_locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// `en_IN.UTF-8`, `en-IN` 같은 표기를 `en-in`으로 맞춘다. auto/빈 값은 None.
pub fn normalize_locale(code: &str) -> Option<String> {
    let base = code.split(['.', '@']).next().unwrap_or_default();
    let c = base.trim().to_lowercase().replace('_', "-");
    match c.as_str() {
        "" | "auto" | "c" | "posix" => None,
        other if other.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') => {
            Some(other.to_string())
        }
        _ => None,
    }
}

/// 시스템 로케일을 추정한다.
pub fn detect_system_locale() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(code) = normalize_locale(&loc) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale(&lang) {
            return Some(code);
        }
    }
    None
}

/// 로케일에 맞는 자릿수 묶음 방식을 고른다. 인도 지역과 힌디어는 Indian.
pub fn grouping_for_locale(locale: &str) -> Grouping {
    let mut parts = locale.split('-');
    let lang = parts.next().unwrap_or_default();
    let is_india = parts.any(|p| p.eq_ignore_ascii_case("in"));
    if is_india || lang.eq_ignore_ascii_case("hi") {
        Grouping::Indian
    } else {
        Grouping::Western
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_posix_style() {
        assert_eq!(normalize_locale("en_IN.UTF-8").as_deref(), Some("en-in"));
        assert_eq!(normalize_locale("ko-KR").as_deref(), Some("ko-kr"));
        assert_eq!(normalize_locale("auto"), None);
        assert_eq!(normalize_locale("C"), None);
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_locale(Some("en-IN"), Some("en-US")), "en-in");
        assert_eq!(resolve_locale(Some("auto"), Some("hi-IN")), "hi-in");
    }

    #[test]
    fn grouping_selection() {
        assert_eq!(grouping_for_locale("en-in"), Grouping::Indian);
        assert_eq!(grouping_for_locale("hi"), Grouping::Indian);
        assert_eq!(grouping_for_locale("en-us"), Grouping::Western);
        assert_eq!(grouping_for_locale("ko-kr"), Grouping::Western);
    }
}
