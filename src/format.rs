//! 계산 결과를 통화 문자열로 표시한다. 계산 엔진은 항상 원시 수치만 반환하고,
//! 표시 형식은 이 모듈에서만 결정한다.

use serde::{Deserialize, Serialize};

use crate::locale::{grouping_for_locale, Grouping};
use crate::valuation::round_to_cents;

/// 통화 표시 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 통화 코드 (표시에는 쓰지 않고 설정 확인용)
    pub code: String,
    /// 금액 앞에 붙는 기호
    pub symbol: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            code: "INR".to_string(),
            symbol: "₹".to_string(),
        }
    }
}

/// 금액을 `₹1,210.00` 형태로 만드는 포매터.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
    grouping: Grouping,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// 통화 설정과 로케일로 포매터를 만든다.
    pub fn for_locale(currency: &CurrencySettings, locale: &str) -> Self {
        Self::new(currency.symbol.clone(), grouping_for_locale(locale))
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// 금액을 소수 둘째 자리까지 반올림해 문자열로 만든다.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}", self.symbol, value);
        }
        // 아주 큰 값은 100배 하는 순간 inf가 되므로 반올림 없이 쓴다.
        let rounded = round_to_cents(value.abs());
        let amount = if rounded.is_finite() { rounded } else { value.abs() };
        let text = format!("{amount:.2}");
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let negative = value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        format!(
            "{}{}{}.{}",
            if negative { "-" } else { "" },
            self.symbol,
            group_digits(int_part, self.grouping),
            frac_part
        )
    }
}

/// 정수 문자열에 자릿수 구분 쉼표를 넣는다.
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let group = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };
    let mut chunks: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        chunks.push(&head[start..end]);
        end = start;
    }
    chunks.reverse();
    chunks.push(tail);
    chunks.join(",")
}

/// 예치 기간 표시: 0, 1Y, nYrs
pub fn format_duration(years: u32) -> String {
    match years {
        0 => "0".to_string(),
        1 => "1Y".to_string(),
        n => format!("{n}Yrs"),
    }
}
