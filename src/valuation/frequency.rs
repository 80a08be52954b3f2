use serde::{Deserialize, Serialize};

/// 이자 복리 주기. 지정하지 않으면 연 1회(Yearly)로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    HalfYearly,
    #[default]
    Yearly,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::HalfYearly,
        CompoundingFrequency::Yearly,
    ];

    /// 입력 문자열을 해석한다. 알 수 없는 값이면 None.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "monthly" | "m" | "12" => Some(CompoundingFrequency::Monthly),
            "quarterly" | "q" | "4" => Some(CompoundingFrequency::Quarterly),
            "halfyearly" | "semiannually" | "semiannual" | "h" | "2" => {
                Some(CompoundingFrequency::HalfYearly)
            }
            "yearly" | "annually" | "annual" | "y" | "1" => Some(CompoundingFrequency::Yearly),
            _ => None,
        }
    }

    /// 입력 문자열을 해석하되, 알 수 없는 값은 Yearly로 폴백한다.
    pub fn parse_or_yearly(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            tracing::warn!(label, "unrecognized compounding frequency, using yearly");
            CompoundingFrequency::Yearly
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::HalfYearly => "half-yearly",
            CompoundingFrequency::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 복리 주기를 연간 복리 횟수로 환산한다. 주기가 없으면 1.
///
/// 분기는 연 4회로 고정한다.
pub fn frequency_to_periods_per_year(frequency: Option<CompoundingFrequency>) -> u32 {
    match frequency {
        Some(CompoundingFrequency::Monthly) => 12,
        Some(CompoundingFrequency::Quarterly) => 4,
        Some(CompoundingFrequency::HalfYearly) => 2,
        Some(CompoundingFrequency::Yearly) | None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_per_year_mapping() {
        assert_eq!(frequency_to_periods_per_year(Some(CompoundingFrequency::Monthly)), 12);
        assert_eq!(frequency_to_periods_per_year(Some(CompoundingFrequency::Quarterly)), 4);
        assert_eq!(frequency_to_periods_per_year(Some(CompoundingFrequency::HalfYearly)), 2);
        assert_eq!(frequency_to_periods_per_year(Some(CompoundingFrequency::Yearly)), 1);
        assert_eq!(frequency_to_periods_per_year(None), 1);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(CompoundingFrequency::parse("Half-Yearly"), Some(CompoundingFrequency::HalfYearly));
        assert_eq!(CompoundingFrequency::parse("half_yearly"), Some(CompoundingFrequency::HalfYearly));
        assert_eq!(CompoundingFrequency::parse(" MONTHLY "), Some(CompoundingFrequency::Monthly));
        assert_eq!(CompoundingFrequency::parse("annually"), Some(CompoundingFrequency::Yearly));
        assert_eq!(CompoundingFrequency::parse("fortnightly"), None);
    }

    #[test]
    fn unknown_label_falls_back_to_yearly() {
        assert_eq!(CompoundingFrequency::parse_or_yearly("weekly"), CompoundingFrequency::Yearly);
        assert_eq!(CompoundingFrequency::parse_or_yearly(""), CompoundingFrequency::Yearly);
    }

    #[test]
    fn label_round_trips_through_parse() {
        for f in CompoundingFrequency::ALL {
            assert_eq!(CompoundingFrequency::parse(f.label()), Some(f));
        }
    }
}
