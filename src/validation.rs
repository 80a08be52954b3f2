//! 입력 폼 검증. 계산 엔진은 검증을 하지 않으므로 모든 입력은 여기를 거친다.

use thiserror::Error;

use crate::valuation::{CompoundingFrequency, ValuationInput};

/// 최소 원금
pub const MIN_PRINCIPAL: f64 = 100.0;
/// 최소 예치 기간 [년]
pub const MIN_TENURE_YEARS: u32 = 1;
/// 이율 입력에 허용하는 소수 자릿수
pub const MAX_RATE_DECIMALS: usize = 2;

/// 폼 필드 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    InterestRate,
    InflationRate,
    TimePeriod,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::Amount => "Amount",
            Field::InterestRate => "Rate of Interest (%)",
            Field::InflationRate => "Rate of Inflation (%)",
            Field::TimePeriod => "Time Period (in Years)",
        };
        f.write_str(label)
    }
}

/// 필드 단위 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: not a finite number")]
    NotFinite { field: Field },
    #[error("Amount must be minimum {min}")]
    AmountBelowMinimum { min: f64 },
    #[error("Rate of interest must be greater than 0")]
    InterestRateNotPositive,
    #[error("{field} must not be negative")]
    Negative { field: Field },
    #[error("{field}: must be a number with up to two decimal places")]
    TooManyDecimals { field: Field },
    #[error("Time period must be at least {min} year")]
    TenureTooShort { min: u32 },
    #[error("Time period must be a whole number of years")]
    TenureNotWhole,
}

impl ValidationError {
    /// 오류가 발생한 필드를 반환한다.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotFinite { field }
            | ValidationError::Negative { field }
            | ValidationError::TooManyDecimals { field } => *field,
            ValidationError::AmountBelowMinimum { .. } => Field::Amount,
            ValidationError::InterestRateNotPositive => Field::InterestRate,
            ValidationError::TenureTooShort { .. } | ValidationError::TenureNotWhole => {
                Field::TimePeriod
            }
        }
    }
}

/// 폼 전체 검증 결과. 실패한 필드를 폼 순서대로 모두 담는다.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }
}

/// 검증 정책. 기본값은 명목 이율이 0보다 커야 하는 엄격 모드다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    pub allow_zero_interest_rate: bool,
}

/// 사용자가 입력한 원시 폼 값.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawForm {
    pub amount: f64,
    pub interest_rate: f64,
    pub inflation_rate: f64,
    pub years: f64,
    pub frequency: Option<String>,
}

/// 소수 자릿수를 센다. 1e-6 미만이나 1e21 이상은 지수 표기(`1.5e-7`)로 바꾼 뒤
/// '.' 뒤의 글자 수를 센다. 지수 표기에 '.'이 없으면 0자리다.
pub fn decimal_places(value: f64) -> usize {
    let abs = value.abs();
    let text = if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        format!("{abs:e}")
    } else {
        abs.to_string()
    };
    match text.split_once('.') {
        Some((_, frac)) => frac.len(),
        None => 0,
    }
}

fn ensure_finite(value: f64, field: Field) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn ensure_rate_precision(value: f64, field: Field) -> Result<f64, ValidationError> {
    if decimal_places(value) > MAX_RATE_DECIMALS {
        Err(ValidationError::TooManyDecimals { field })
    } else {
        Ok(value)
    }
}

/// 원금을 검증한다.
pub fn validate_amount(value: f64) -> Result<f64, ValidationError> {
    let value = ensure_finite(value, Field::Amount)?;
    if value < MIN_PRINCIPAL {
        return Err(ValidationError::AmountBelowMinimum { min: MIN_PRINCIPAL });
    }
    Ok(value)
}

/// 명목 이율을 검증한다.
pub fn validate_interest_rate(value: f64, policy: &ValidationPolicy) -> Result<f64, ValidationError> {
    let value = ensure_finite(value, Field::InterestRate)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: Field::InterestRate,
        });
    }
    if value == 0.0 && !policy.allow_zero_interest_rate {
        return Err(ValidationError::InterestRateNotPositive);
    }
    ensure_rate_precision(value, Field::InterestRate)
}

/// 물가상승률을 검증한다.
pub fn validate_inflation_rate(value: f64) -> Result<f64, ValidationError> {
    let value = ensure_finite(value, Field::InflationRate)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: Field::InflationRate,
        });
    }
    ensure_rate_precision(value, Field::InflationRate)
}

/// 예치 기간을 검증하고 정수 연수로 바꾼다.
pub fn validate_years(value: f64) -> Result<u32, ValidationError> {
    let value = ensure_finite(value, Field::TimePeriod)?;
    if value < f64::from(MIN_TENURE_YEARS) {
        return Err(ValidationError::TenureTooShort {
            min: MIN_TENURE_YEARS,
        });
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::TenureNotWhole);
    }
    Ok(value as u32)
}

/// 폼 전체를 검증해 계산 엔진 입력을 만든다.
pub fn validate(form: &RawForm, policy: &ValidationPolicy) -> Result<ValuationInput, ValidationErrors> {
    let mut errors = Vec::new();

    let principal = validate_amount(form.amount).map_err(|e| errors.push(e)).ok();
    let nominal_rate = validate_interest_rate(form.interest_rate, policy)
        .map_err(|e| errors.push(e))
        .ok();
    let inflation_rate = validate_inflation_rate(form.inflation_rate)
        .map_err(|e| errors.push(e))
        .ok();
    let tenure_years = validate_years(form.years).map_err(|e| errors.push(e)).ok();

    match (principal, nominal_rate, inflation_rate, tenure_years) {
        (Some(principal), Some(nominal_rate), Some(inflation_rate), Some(tenure_years)) => {
            Ok(ValuationInput {
                principal,
                nominal_rate,
                inflation_rate,
                tenure_years,
                compounding_frequency: form
                    .frequency
                    .as_deref()
                    .map(CompoundingFrequency::parse_or_yearly),
            })
        }
        _ => {
            tracing::debug!(count = errors.len(), "form rejected");
            Err(ValidationErrors(errors))
        }
    }
}
