use std::io::{BufRead, Write};

use thiserror::Error;

use crate::config::Config;
use crate::format::CurrencyFormatter;
use crate::locale;
use crate::report::ValuationReport;
use crate::ui_cli::{PartialForm, Prompter};
use crate::validation::{self, RawForm, ValidationErrors};
use crate::valuation::{self, CompoundingFrequency};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("입력 오류: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 한 번의 계산 요청. CLI 플래그에서 채워진다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub inflation_rate: Option<f64>,
    pub years: Option<f64>,
    pub frequency: Option<String>,
    pub locale: Option<String>,
    pub allow_zero_rate: bool,
}

/// 입력을 모아 계산하고 결과 보고서를 만든다.
///
/// 숫자 필드가 모두 주어지면 한 번에 검증하고, 하나라도 빠지면 대화형으로 묻는다.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    opts: &RunOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<ValuationReport, AppError> {
    let mut policy = config.validation_policy();
    policy.allow_zero_interest_rate |= opts.allow_zero_rate;

    let frequency = opts
        .frequency
        .as_deref()
        .map(CompoundingFrequency::parse_or_yearly)
        .or(config.default_frequency);

    let input = match (opts.amount, opts.interest_rate, opts.inflation_rate, opts.years) {
        (Some(amount), Some(interest_rate), Some(inflation_rate), Some(years)) => {
            let raw = RawForm {
                amount,
                interest_rate,
                inflation_rate,
                years,
                frequency: None,
            };
            let mut input = validation::validate(&raw, &policy)?;
            input.compounding_frequency = frequency;
            input
        }
        _ => {
            tracing::debug!("incomplete flags, prompting for remaining fields");
            let form = PartialForm {
                amount: opts.amount,
                interest_rate: opts.interest_rate,
                inflation_rate: opts.inflation_rate,
                years: opts.years,
                frequency,
            };
            prompter.fill_form(&form, &policy)?
        }
    };

    let result = valuation::compute(input);
    tracing::info!(
        principal = input.principal,
        future_value = result.future_value,
        real_value = result.real_value,
        "valuation computed"
    );

    let locale = locale::resolve_locale(opts.locale.as_deref(), Some(config.locale.as_str()));
    let formatter = CurrencyFormatter::for_locale(&config.currency, &locale);
    Ok(ValuationReport::new(&input, &result, &formatter))
}
