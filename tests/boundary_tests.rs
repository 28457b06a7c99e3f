use loancalc::domain::language::Language;
use loancalc::domain::loan::{LoanInput, LoanTerms};
use loancalc::error::LoanError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// f64 reference implementation of the annuity formula.
fn reference_payment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    let r = annual_rate / 100.0 / 12.0;
    if r == 0.0 {
        principal / months as f64
    } else {
        let x = (1.0 + r).powi(months as i32);
        principal * x * r / (x - 1.0)
    }
}

#[test]
fn test_payment_matches_float_reference() {
    let cases = [
        (10000.0, 5.0, 60),
        (250000.0, 3.5, 360),
        (1000000.0, 7.25, 240),
        (500.0, 19.99, 12),
        (75000.0, 0.0, 120),
    ];

    for (principal, rate, months) in cases {
        let terms = LoanTerms::new(
            Decimal::from_str(&principal.to_string()).unwrap(),
            Decimal::from_str(&rate.to_string()).unwrap(),
            months,
        );
        let payment = terms.monthly_payment().unwrap();
        let reference = reference_payment(principal, rate, months);
        let diff = (payment.to_string().parse::<f64>().unwrap() - reference).abs();
        assert!(
            diff < 0.01,
            "payment {payment} deviates from reference {reference} for {principal} @ {rate}% / {months}"
        );
    }
}

#[test]
fn test_tiny_rate_long_term_stays_finite() {
    // The x -> 1 precision boundary: payment must stay at or above the
    // straight-line installment and parse as a sane number.
    let terms = LoanTerms::new(dec!(100000), dec!(0.01), 600);
    let payment = terms.monthly_payment().unwrap();
    let straight_line = dec!(100000) / dec!(600);
    assert!(payment >= straight_line.round_dp(2));
    assert!(payment < dec!(200));
}

#[test]
fn test_extreme_term_overflows_cleanly() {
    let terms = LoanTerms::new(dec!(1000), dec!(100), u32::MAX);
    assert!(matches!(
        terms.monthly_payment(),
        Err(LoanError::CalculationError(_))
    ));
}

#[test]
fn test_large_values_via_locale_parsing() {
    let input = LoanInput::new("1.000.000,00", "3,50", "360", Language::De);
    let terms = input.to_terms().unwrap();
    assert_eq!(terms.principal, dec!(1000000.00));
    let payment = terms.monthly_payment().unwrap();
    assert_eq!(Language::De.format_currency(payment), "4.490,45 €");
}
