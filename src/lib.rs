//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod format;
pub mod locale;
pub mod logging;
pub mod report;
pub mod ui_cli;
pub mod validation;
pub mod valuation;
