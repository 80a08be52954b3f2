//! 만기 가치/물가 반영 가치 계산 회귀 테스트.
use deposit_returns_calculator::valuation::{compute, CompoundingFrequency, ValuationInput};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn simple_variant_with_inflation() {
    // 1000 * 1.10^2 = 1210.00, 1210 / 1.05^2 = 1097.5057
    let res = compute(ValuationInput::simple(1000.0, 10.0, 5.0, 2));
    assert_eq!(res.future_value, 1210.0);
    assert_eq!(res.real_value, 1097.51);
    assert_close("difference", res.difference_value, -112.49, 1e-9);
    assert_close("nominal_return", res.nominal_return, 210.0, 1e-9);
    assert_close("adjusted_return", res.adjusted_return, 97.51, 1e-9);
}

#[test]
fn monthly_compounding_without_inflation() {
    // 1000 * 1.01^12 = 1126.825...
    let input = ValuationInput::simple(1000.0, 12.0, 0.0, 1).with_frequency(CompoundingFrequency::Monthly);
    let res = compute(input);
    assert_eq!(res.future_value, 1126.83);
    assert_eq!(res.real_value, 0.0);
    assert_eq!(res.adjusted_return, 0.0);
    assert_close("nominal_return", res.nominal_return, 126.83, 1e-9);
}

#[test]
fn quarterly_uses_four_periods() {
    // 1000 * 1.02^4 = 1082.43216
    let input = ValuationInput::simple(1000.0, 8.0, 0.0, 1).with_frequency(CompoundingFrequency::Quarterly);
    assert_eq!(compute(input).future_value, 1082.43);
}

#[test]
fn half_yearly_uses_two_periods() {
    // 1000 * 1.05^4 = 1215.50625
    let input = ValuationInput::simple(1000.0, 10.0, 0.0, 2).with_frequency(CompoundingFrequency::HalfYearly);
    assert_eq!(compute(input).future_value, 1215.51);
}

#[test]
fn more_frequent_compounding_grows_faster() {
    let base = ValuationInput::simple(10_000.0, 9.5, 3.0, 10);
    let mut previous = compute(base.with_frequency(CompoundingFrequency::Yearly)).future_value;
    for freq in [
        CompoundingFrequency::HalfYearly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
    ] {
        let fv = compute(base.with_frequency(freq)).future_value;
        assert!(fv > previous, "{freq}: {fv} <= {previous}");
        previous = fv;
    }
}

#[test]
fn zero_inflation_reports_zero_real_value() {
    let res = compute(ValuationInput::simple(5000.0, 6.75, 0.0, 4));
    assert_eq!(res.real_value, 0.0);
    assert_eq!(res.adjusted_return, 0.0);
    // 물가가 없으면 추가 비용도 없다
    assert_eq!(res.difference_value, 0.0);
}

#[test]
fn derived_metrics_follow_their_definitions() {
    let principals = [100.0, 999.99, 25_000.0, 1_000_000.0];
    let rates = [0.0, 0.01, 4.5, 12.0, 35.75];
    let inflations = [0.0, 0.5, 6.25];
    let tenures = [1, 2, 7, 30];
    for &p in &principals {
        for &r in &rates {
            for &i in &inflations {
                for &t in &tenures {
                    for freq in CompoundingFrequency::ALL {
                        let input = ValuationInput::simple(p, r, i, t).with_frequency(freq);
                        let res = compute(input);
                        assert!(res.future_value >= p, "{input:?} -> {res:?}");
                        assert_eq!(res.nominal_return, res.future_value - p);
                        if i > 0.0 {
                            assert_eq!(res.difference_value, res.real_value - res.future_value);
                            assert_eq!(res.adjusted_return, res.real_value - p);
                            assert!(res.real_value <= res.future_value);
                        } else {
                            assert_eq!(res.real_value, 0.0);
                            assert_eq!(res.adjusted_return, 0.0);
                            assert_close("difference", res.difference_value, 0.0, 1e-9);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn compute_is_deterministic() {
    let input = ValuationInput::simple(12_345.67, 7.35, 4.85, 13).with_frequency(CompoundingFrequency::Monthly);
    let a = compute(input);
    let b = compute(input);
    assert_eq!(a.future_value.to_bits(), b.future_value.to_bits());
    assert_eq!(a.real_value.to_bits(), b.real_value.to_bits());
    assert_eq!(a.difference_value.to_bits(), b.difference_value.to_bits());
    assert_eq!(a.nominal_return.to_bits(), b.nominal_return.to_bits());
    assert_eq!(a.adjusted_return.to_bits(), b.adjusted_return.to_bits());
}

#[test]
fn minimum_principal_is_accepted_by_engine() {
    let res = compute(ValuationInput::simple(100.0, 5.0, 2.0, 1));
    assert_eq!(res.future_value, 105.0);
    assert_eq!(res.real_value, 102.94);
}

#[test]
fn concurrent_calls_agree() {
    let input = ValuationInput::simple(7_500.0, 8.25, 5.5, 15).with_frequency(CompoundingFrequency::Quarterly);
    let expected = compute(input);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || compute(input)))
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("thread"), expected);
    }
}
