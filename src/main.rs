use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use deposit_returns_calculator::{app, config, logging, ui_cli};

/// 일시 예치금의 만기 가치와 물가 반영 가치를 계산한다.
/// 숫자 입력이 하나라도 빠지면 대화형으로 묻는다.
#[derive(Debug, Parser)]
#[command(name = "returns_calculator", version, about)]
struct Cli {
    /// Deposit amount (minimum 100)
    #[arg(long, short = 'a')]
    amount: Option<f64>,
    /// Annual rate of interest in percent
    #[arg(long, short = 'r')]
    interest_rate: Option<f64>,
    /// Annual rate of inflation in percent
    #[arg(long, short = 'i')]
    inflation_rate: Option<f64>,
    /// Time period in whole years
    #[arg(long, short = 'y')]
    years: Option<f64>,
    /// Compounding frequency: monthly, quarterly, half-yearly, yearly
    #[arg(long, short = 'f')]
    frequency: Option<String>,
    /// Display locale (auto, en-us, en-in, ...)
    #[arg(long = "locale", visible_alias = "lang", short = 'L')]
    locale: Option<String>,
    /// Config file path
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Accept a 0% rate of interest
    #[arg(long)]
    allow_zero_rate: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 계산 결과를 출력한다.
fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default_at(&cli.config)?;
    let opts = app::RunOptions {
        amount: cli.amount,
        interest_rate: cli.interest_rate,
        inflation_rate: cli.inflation_rate,
        years: cli.years,
        frequency: cli.frequency,
        locale: cli.locale,
        allow_zero_rate: cli.allow_zero_rate,
    };
    let mut prompter = ui_cli::stdio();
    let report = app::run(&cfg, &opts, &mut prompter)?;
    println!("\n{}", report.render());
    Ok(())
}
