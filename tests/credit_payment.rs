use premium_auto_wasm::domain::catalog::Rubles;
use premium_auto_wasm::domain::credit::{ANNUAL_RATE, CreditCalculator, LoanTerm, MAX_PRICE, MIN_PRICE, monthly_payment};
use quickcheck_macros::quickcheck;

#[test]
fn reference_payments_at_default_rate() {
    assert_eq!(monthly_payment(1_000_000, 200_000, 60, ANNUAL_RATE), 15_060);
    assert_eq!(monthly_payment(1_000_000, 200_000, 12, ANNUAL_RATE), 68_449);
    assert_eq!(monthly_payment(1_000_000, 200_000, 84, ANNUAL_RATE), 11_270);
}

#[test]
fn zero_rate_is_linear() {
    assert_eq!(monthly_payment(1_000_000, 200_000, 60, 0.0), 13_333);
    assert_eq!(monthly_payment(1_200_000, 0, 12, 0.0), 100_000);
}

#[test]
fn tiny_rates_approach_linear_payment() {
    assert_eq!(monthly_payment(1_000_000, 200_000, 60, 1e-12), 13_333);
    assert_eq!(monthly_payment(1_000_000, 200_000, 60, 1e-15), 13_333);
    assert_eq!(monthly_payment(1_000_000, 200_000, 60, 1e-3), 13_334);
}

#[test]
fn no_principal_means_no_payment() {
    assert_eq!(monthly_payment(1_000_000, 1_000_000, 60, ANNUAL_RATE), 0);
    assert_eq!(monthly_payment(500_000, 900_000, 60, ANNUAL_RATE), 0);
}

#[test]
fn calculator_exposes_breakdown() {
    let mut calc = CreditCalculator::default();
    assert_eq!(calc.principal(), Rubles::new(800_000));
    calc.set_term(LoanTerm::Months12);
    assert_eq!(calc.monthly_payment(), Rubles::new(68_449));
    calc.set_initial(10_000_000);
    assert_eq!(calc.initial(), Rubles::new(500_000));
}

#[quickcheck]
fn payment_grows_with_price(price: u32, extra: u16) -> bool {
    let price = (price as u64).clamp(MIN_PRICE, MAX_PRICE);
    let higher = price + extra as u64 * 1_000;
    monthly_payment(higher, 0, 60, ANNUAL_RATE) >= monthly_payment(price, 0, 60, ANNUAL_RATE)
}

#[quickcheck]
fn longer_terms_never_cost_more_per_month(price: u32, initial_share: u8) -> bool {
    let price = (price as u64).clamp(MIN_PRICE, MAX_PRICE);
    let initial = price / 2 * (initial_share as u64 % 101) / 100;
    let payments: Vec<u64> = [12u16, 24, 36, 48, 60, 84]
        .iter()
        .map(|months| monthly_payment(price, initial, *months, ANNUAL_RATE))
        .collect();
    payments.windows(2).all(|pair| pair[0] >= pair[1])
}

#[quickcheck]
fn setters_keep_initial_within_half_price(price: u64, initial: u64) -> bool {
    let mut calc = CreditCalculator::default();
    calc.set_initial(initial);
    calc.set_price(price);
    let p = calc.price().value();
    (MIN_PRICE..=MAX_PRICE).contains(&p) && calc.initial().value() <= p / 2
}

#[quickcheck]
fn installments_cover_principal(price: u32, months_index: u8) -> bool {
    let price = (price as u64).clamp(MIN_PRICE, MAX_PRICE);
    let months = [12u16, 24, 36, 48, 60, 84][months_index as usize % 6];
    // Rounding to whole rubles may shave at most half a ruble per installment.
    monthly_payment(price, 0, months, ANNUAL_RATE) * months as u64 + months as u64 >= price
}

fn rate_percent(raw: u16) -> f64 {
    (raw % 3_001) as f64 / 100.0
}

#[quickcheck]
fn payment_grows_with_rate(price: u32, a: u16, b: u16) -> bool {
    let price = (price as u64).clamp(MIN_PRICE, MAX_PRICE);
    let (low, high) = if rate_percent(a) <= rate_percent(b) {
        (rate_percent(a), rate_percent(b))
    } else {
        (rate_percent(b), rate_percent(a))
    };
    monthly_payment(price, price / 5, 60, low) <= monthly_payment(price, price / 5, 60, high)
}

#[quickcheck]
fn larger_down_payment_never_costs_more(price: u32, a: u8, b: u8) -> bool {
    let price = (price as u64).clamp(MIN_PRICE, MAX_PRICE);
    let share = |raw: u8| price / 2 * (raw as u64 % 101) / 100;
    let (small, large) = (share(a).min(share(b)), share(a).max(share(b)));
    monthly_payment(price, large, 36, ANNUAL_RATE) <= monthly_payment(price, small, 36, ANNUAL_RATE)
}

#[quickcheck]
fn installments_cover_principal_after_down_payment(price: u32, initial_share: u8, months_index: u8) -> bool {
    let price = (price as u64).clamp(MIN_PRICE, MAX_PRICE);
    let initial = price / 2 * (initial_share as u64 % 101) / 100;
    let months = [12u16, 24, 36, 48, 60, 84][months_index as usize % 6];
    monthly_payment(price, initial, months, ANNUAL_RATE) * months as u64 + months as u64 >= price - initial
}
