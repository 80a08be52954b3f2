use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::validation::{
    validate_amount, validate_inflation_rate, validate_interest_rate, validate_years,
    ValidationError, ValidationPolicy,
};
use crate::valuation::{CompoundingFrequency, ValuationInput};

/// 일부만 채워진 입력 폼. None인 필드는 대화형으로 묻는다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialForm {
    pub amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub inflation_rate: Option<f64>,
    pub years: Option<f64>,
    pub frequency: Option<CompoundingFrequency>,
}

/// 입력/출력 스트림을 감싼 대화형 입력기.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// 표준 입출력에 연결된 입력기를 만든다.
pub fn stdio() -> Prompter<io::StdinLock<'static>, io::Stdout> {
    Prompter::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 빈 필드를 물어 채우고 검증된 계산 입력을 돌려준다.
    /// 미리 채워진 값이 잘못되었으면 오류를 보여주고 다시 묻는다.
    pub fn fill_form(
        &mut self,
        form: &PartialForm,
        policy: &ValidationPolicy,
    ) -> Result<ValuationInput, AppError> {
        writeln!(self.output, "\n=== Returns Calculator ===")?;
        let principal = self.field(form.amount, "Amount: ", validate_amount)?;
        let nominal_rate = self.field(form.interest_rate, "Rate of Interest (%): ", |v| {
            validate_interest_rate(v, policy)
        })?;
        let inflation_rate = self.field(
            form.inflation_rate,
            "Rate of Inflation (%): ",
            validate_inflation_rate,
        )?;
        let tenure_years = self.field(form.years, "Time Period (in Years): ", validate_years)?;
        let compounding_frequency = match form.frequency {
            Some(f) => Some(f),
            None => self.read_frequency()?,
        };
        Ok(ValuationInput {
            principal,
            nominal_rate,
            inflation_rate,
            tenure_years,
            compounding_frequency,
        })
    }

    fn field<T>(
        &mut self,
        preset: Option<f64>,
        prompt: &str,
        check: impl Fn(f64) -> Result<T, ValidationError>,
    ) -> Result<T, AppError> {
        if let Some(v) = preset {
            match check(v) {
                Ok(ok) => return Ok(ok),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        loop {
            let v = self.read_f64(prompt)?;
            match check(v) {
                Ok(ok) => return Ok(ok),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn read_frequency(&mut self) -> Result<Option<CompoundingFrequency>, AppError> {
        let sel = self.read_line("Compounding (monthly/quarterly/half-yearly/yearly, Enter to skip): ")?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(None);
        }
        Ok(Some(CompoundingFrequency::parse_or_yearly(sel)))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf)
    }

    fn read_f64(&mut self, prompt: &str) -> Result<f64, AppError> {
        loop {
            let s = self.read_line(prompt)?;
            match s.trim().parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}
