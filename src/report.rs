use crate::format::{format_duration, CurrencyFormatter};
use crate::valuation::{ValuationInput, ValuationResult};

/// 결과 표 구역. 출력 시 구역이 바뀌면 구분선을 넣는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inputs,
    Values,
    Returns,
}

/// 결과 표의 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub section: Section,
    pub label: &'static str,
    pub value: String,
}

/// 결과 아래에 붙는 용어 설명.
pub const NOTES: [&str; 3] = [
    "Maturity Value is the value without considering inflation.",
    "Inflation adjusted Value reflects its equivalent worth in today's value.",
    "Difference is the added costs needed, caused due to inflation.",
];

/// 계산 결과 보고서.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationReport {
    pub rows: Vec<ReportRow>,
}

impl ValuationReport {
    pub fn new(input: &ValuationInput, result: &ValuationResult, formatter: &CurrencyFormatter) -> Self {
        let mut rows = vec![
            row(Section::Inputs, "Present Value", formatter.format(input.principal)),
            row(Section::Inputs, "Interest Rate (%)", input.nominal_rate.to_string()),
            row(Section::Inputs, "Inflation Rate (%)", input.inflation_rate.to_string()),
            row(Section::Inputs, "Duration", format_duration(input.tenure_years)),
        ];
        if let Some(freq) = input.compounding_frequency {
            rows.push(row(Section::Inputs, "Compounding", freq.to_string()));
        }
        rows.extend([
            row(Section::Values, "Maturity Value", formatter.format(result.future_value)),
            row(
                Section::Values,
                "Inflation adjusted Value",
                formatter.format(result.real_value),
            ),
            row(Section::Values, "Difference", formatter.format(result.difference_value)),
            row(Section::Returns, "Maturity returns", formatter.format(result.nominal_return)),
            row(Section::Returns, "Adjusted returns", formatter.format(result.adjusted_return)),
        ]);
        Self { rows }
    }

    /// 라벨로 값을 찾는다.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    /// 두 열로 정렬된 텍스트 표를 만든다.
    pub fn render(&self) -> String {
        let label_w = self.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        let value_w = self.rows.iter().map(|r| r.value.chars().count()).max().unwrap_or(0);
        let rule = "-".repeat(label_w + value_w + 2);

        let mut out = String::new();
        let mut current = None;
        for r in &self.rows {
            if current != Some(r.section) {
                if current.is_some() {
                    out.push_str(&rule);
                    out.push('\n');
                }
                if r.section == Section::Returns {
                    out.push_str("Returns\n");
                }
                current = Some(r.section);
            }
            let pad = value_w - r.value.chars().count();
            out.push_str(&format!(
                "{:<label_w$}  {}{}\n",
                r.label,
                " ".repeat(pad),
                r.value
            ));
        }
        out.push('\n');
        for note in NOTES {
            out.push_str(note);
            out.push('\n');
        }
        out
    }
}

fn row(section: Section, label: &'static str, value: String) -> ReportRow {
    ReportRow {
        section,
        label,
        value,
    }
}
