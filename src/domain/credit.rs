//! Fixed-rate amortized loan calculator.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::domain::catalog::Rubles;

pub const MIN_PRICE: u64 = 500_000;
pub const MAX_PRICE: u64 = 15_000_000;
pub const PRICE_STEP: u64 = 100_000;
pub const INITIAL_STEP: u64 = 50_000;
/// Nominal annual rate, percent.
pub const ANNUAL_RATE: f64 = 4.9;

/// Loan terms offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum LoanTerm {
    Months12,
    Months24,
    Months36,
    Months48,
    Months60,
    Months84,
}

impl LoanTerm {
    pub fn months(&self) -> u16 {
        match self {
            Self::Months12 => 12,
            Self::Months24 => 24,
            Self::Months36 => 36,
            Self::Months48 => 48,
            Self::Months60 => 60,
            Self::Months84 => 84,
        }
    }

    pub fn label(&self) -> String {
        format!("{} мес", self.months())
    }
}

impl From<LoanTerm> for u16 {
    fn from(term: LoanTerm) -> Self {
        term.months()
    }
}

impl TryFrom<u16> for LoanTerm {
    type Error = String;

    fn try_from(months: u16) -> Result<Self, Self::Error> {
        LoanTerm::iter()
            .find(|term| term.months() == months)
            .ok_or_else(|| format!("unsupported loan term: {} months", months))
    }
}

/// Monthly payment of a standard amortizing loan, rounded to whole rubles.
///
/// A zero rate degrades to linear repayment and a non-positive principal
/// yields zero.
pub fn monthly_payment(price: u64, initial: u64, months: u16, annual_rate_percent: f64) -> u64 {
    if months == 0 || initial >= price {
        return 0;
    }
    let principal = (price - initial) as f64;
    let n = months as f64;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate <= 0.0 {
        return (principal / n).round() as u64;
    }
    // (1 + r)^n - 1 via ln_1p/exp_m1 so tiny rates stay close to principal / n.
    let growth_minus_one = (n * monthly_rate.ln_1p()).exp_m1();
    let payment = principal * monthly_rate * (growth_minus_one + 1.0) / growth_minus_one;
    payment.round() as u64
}

/// Slider state of the calculator. Every setter keeps `0 <= initial <= price / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditCalculator {
    price: u64,
    initial: u64,
    term: LoanTerm,
    rate: f64,
}

impl Default for CreditCalculator {
    fn default() -> Self {
        Self { price: 1_000_000, initial: 200_000, term: LoanTerm::Months60, rate: ANNUAL_RATE }
    }
}

impl CreditCalculator {
    pub fn price(&self) -> Rubles {
        Rubles::new(self.price)
    }

    pub fn initial(&self) -> Rubles {
        Rubles::new(self.initial)
    }

    pub fn term(&self) -> LoanTerm {
        self.term
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Upper bound of the down-payment slider for the current price.
    pub fn max_initial(&self) -> u64 {
        self.price / 2
    }

    pub fn set_price(&mut self, price: u64) {
        self.price = price.clamp(MIN_PRICE, MAX_PRICE);
        self.initial = self.initial.min(self.max_initial());
    }

    pub fn set_initial(&mut self, initial: u64) {
        self.initial = initial.min(self.max_initial());
    }

    pub fn set_term(&mut self, term: LoanTerm) {
        self.term = term;
    }

    pub fn principal(&self) -> Rubles {
        Rubles::new(self.price.saturating_sub(self.initial))
    }

    pub fn monthly_payment(&self) -> Rubles {
        Rubles::new(monthly_payment(self.price, self.initial, self.term.months(), self.rate))
    }
}
