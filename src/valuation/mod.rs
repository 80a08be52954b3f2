//! 예금 만기 가치 및 물가 반영 가치 계산 모듈.
//! 상태를 갖지 않는 순수 계산만 담고, 입력 검증·표시 형식은 다루지 않는다.

pub mod engine;
pub mod frequency;

pub use engine::{compute, round_to_cents, ValuationInput, ValuationResult};
pub use frequency::{frequency_to_periods_per_year, CompoundingFrequency};
