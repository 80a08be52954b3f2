//! 개발용 진단 로그. `RUST_LOG`로 수준을 조절하며 stderr로만 출력한다.
//! 계산 결과 출력(stdout)과는 섞이지 않는다.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// tracing 구독자를 초기화한다. `RUST_LOG`가 없으면 `warn`.
///
/// ```bash
/// RUST_LOG=deposit_returns_calculator=debug returns_calculator --amount 1000
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
