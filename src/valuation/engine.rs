use serde::{Deserialize, Serialize};

use super::frequency::{frequency_to_periods_per_year, CompoundingFrequency};

/// 일시 예치금 평가 입력. 검증은 호출자(validation 모듈)의 책임이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// 원금 (최소 100)
    pub principal: f64,
    /// 연 명목 이자율 [%]
    pub nominal_rate: f64,
    /// 연 물가상승률 [%]
    pub inflation_rate: f64,
    /// 예치 기간 [년]
    pub tenure_years: u32,
    /// 복리 주기. None이면 연 복리.
    pub compounding_frequency: Option<CompoundingFrequency>,
}

impl ValuationInput {
    /// 복리 주기 없이(연 복리) 입력을 만든다.
    pub fn simple(principal: f64, nominal_rate: f64, inflation_rate: f64, tenure_years: u32) -> Self {
        Self {
            principal,
            nominal_rate,
            inflation_rate,
            tenure_years,
            compounding_frequency: None,
        }
    }

    pub fn with_frequency(mut self, frequency: CompoundingFrequency) -> Self {
        self.compounding_frequency = Some(frequency);
        self
    }
}

/// 평가 결과. 모든 값은 원금과 같은 통화 단위의 원시 수치다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// 만기 금액 (명목)
    pub future_value: f64,
    /// 물가 반영 현재가치. 물가상승률이 0이면 0으로 보고한다.
    pub real_value: f64,
    /// 할인 가치 - future_value. 물가상승률이 0이면 0.
    pub difference_value: f64,
    /// future_value - principal
    pub nominal_return: f64,
    /// real_value - principal (물가상승률이 0이면 0)
    pub adjusted_return: f64,
}

/// 소수점 둘째 자리에서 반올림한다 (0.5는 0에서 멀어지는 방향).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 만기 금액과 물가 반영 가치를 계산한다.
///
/// 입력 도메인(원금 >= 100, 기간 >= 1, 이율 >= 0)은 호출자가 보장해야 한다.
/// 반올림은 만기 금액 계산 직후와 물가 반영 가치 계산 직후 두 번만 한다.
pub fn compute(input: ValuationInput) -> ValuationResult {
    debug_assert!(input.principal >= 0.0, "principal must not be negative");
    debug_assert!(input.nominal_rate >= 0.0, "nominal rate must not be negative");
    debug_assert!(input.inflation_rate >= 0.0, "inflation rate must not be negative");

    let periods = f64::from(frequency_to_periods_per_year(input.compounding_frequency));
    let years = f64::from(input.tenure_years);

    let growth = (1.0 + input.nominal_rate / 100.0 / periods).powf(periods * years);
    let future_value = round_to_cents(input.principal * growth);

    // 할인 가치는 항상 계산하고, 물가상승률이 0일 때는 보고용 real_value만 0으로 둔다.
    let discount = (1.0 + input.inflation_rate / 100.0).powf(years);
    let discounted = round_to_cents(future_value / discount);
    let (real_value, adjusted_return) = if input.inflation_rate > 0.0 {
        (discounted, discounted - input.principal)
    } else {
        (0.0, 0.0)
    };

    ValuationResult {
        future_value,
        real_value,
        difference_value: discounted - future_value,
        nominal_return: future_value - input.principal,
        adjusted_return,
    }
}
