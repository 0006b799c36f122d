use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::PaymentSchedule;

use super::PeriodicPayment;

/// amortization calculator for one payment schedule
#[derive(Debug, Clone, Copy)]
pub struct AmortizationCalculator {
    schedule: PaymentSchedule,
}

impl AmortizationCalculator {
    pub fn new(schedule: PaymentSchedule) -> Self {
        Self { schedule }
    }

    /// level payment due each period, rounded to cents
    pub fn periodic_payment(
        &self,
        loan_amount: Money,
        amortization_years: u32,
        annual_rate: Rate,
    ) -> Result<PeriodicPayment> {
        let payments_per_year = self.schedule.payments_per_year();
        let total_payments = amortization_years
            .checked_mul(payments_per_year)
            .ok_or_else(|| CalculatorError::calculation("payment count overflow"))?;
        let periodic_rate = annual_rate.per_period(payments_per_year);

        let mut amount = level_payment(
            loan_amount.as_decimal(),
            periodic_rate.as_decimal(),
            total_payments,
        )?;

        // half the monthly payment, paid every two weeks
        if self.schedule == PaymentSchedule::AcceleratedBiWeekly {
            amount /= Decimal::TWO;
        }

        debug!(
            schedule = %self.schedule,
            payments_per_year,
            total_payments,
            periodic_rate = %periodic_rate.as_decimal(),
            payment = %amount,
            "amortized payment"
        );

        Ok(PeriodicPayment {
            schedule: self.schedule,
            payments_per_year,
            total_payments,
            periodic_rate,
            amount: Money::from_decimal_cents(amount),
        })
    }
}

/// periodic payment for a loan, rounded to cents
///
/// `annual_interest_rate` is a percentage figure, e.g. 4.19
pub fn payment(
    total_loan_amount: Money,
    schedule: PaymentSchedule,
    amortization_years: u32,
    annual_interest_rate: Decimal,
) -> Result<Money> {
    AmortizationCalculator::new(schedule)
        .periodic_payment(
            total_loan_amount,
            amortization_years,
            Rate::from_percent(annual_interest_rate),
        )
        .map(|p| p.amount)
}

/// level payment P = L * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// a zero rate repays principal in equal parts
fn level_payment(principal: Decimal, rate: Decimal, periods: u32) -> Result<Decimal> {
    if periods == 0 {
        return Err(CalculatorError::calculation("amortization must cover at least one payment"));
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let base = Decimal::ONE + rate;
    let mut compound = Decimal::ONE;
    for _ in 0..periods {
        compound = compound
            .checked_mul(base)
            .ok_or_else(|| CalculatorError::calculation("compound factor overflow"))?;
    }

    // r·c stays small, principal is applied last
    let factor = rate
        .checked_mul(compound)
        .and_then(|v| v.checked_div(compound - Decimal::ONE))
        .ok_or_else(|| CalculatorError::calculation("rate too small to amortize"))?;

    principal
        .checked_mul(factor)
        .ok_or_else(|| CalculatorError::calculation("payment overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // 300,000 price, 42,000 down, 7,998 premium
    fn insured_loan() -> Money {
        Money::from_major(265_998)
    }

    #[test]
    fn test_reference_payments() {
        let monthly = payment(insured_loan(), PaymentSchedule::Monthly, 25, dec!(4.19)).unwrap();
        assert_eq!(monthly, Money::from_cents(143209));

        let accelerated =
            payment(insured_loan(), PaymentSchedule::AcceleratedBiWeekly, 25, dec!(4.19)).unwrap();
        assert_eq!(accelerated, Money::from_cents(71605));

        let bi_weekly = payment(insured_loan(), PaymentSchedule::BiWeekly, 25, dec!(4.19)).unwrap();
        assert_eq!(bi_weekly, Money::from_cents(66061));
    }

    #[test]
    fn test_periodic_payment_details() {
        let p = AmortizationCalculator::new(PaymentSchedule::BiWeekly)
            .periodic_payment(insured_loan(), 25, Rate::from_percent(dec!(4.19)))
            .unwrap();

        assert_eq!(p.payments_per_year, 26);
        assert_eq!(p.total_payments, 650);
        assert_eq!(p.periodic_rate, Rate::from_percent(dec!(4.19)).per_period(26));
        assert_eq!(p.amount, Money::from_cents(66061));
    }

    #[test]
    fn test_accelerated_is_half_of_monthly_basis() {
        let principal = insured_loan().as_decimal();
        let r = dec!(0.0419) / dec!(12);

        let monthly = level_payment(principal, r, 300).unwrap();
        let p = AmortizationCalculator::new(PaymentSchedule::AcceleratedBiWeekly)
            .periodic_payment(insured_loan(), 25, Rate::from_percent(dec!(4.19)))
            .unwrap();

        assert_eq!(p.total_payments, 300);
        assert_eq!(p.amount, Money::from_decimal_cents(monthly / Decimal::TWO));
    }

    #[test]
    fn test_deterministic() {
        let first = payment(insured_loan(), PaymentSchedule::Monthly, 30, dec!(5.5)).unwrap();
        for _ in 0..10 {
            let again = payment(insured_loan(), PaymentSchedule::Monthly, 30, dec!(5.5)).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_monotonic_in_interest_rate() {
        let rates = [
            dec!(0.5),
            dec!(1),
            dec!(2.25),
            dec!(4.19),
            dec!(7),
            dec!(12.5),
            dec!(25),
            dec!(100),
        ];

        for schedule in [
            PaymentSchedule::Monthly,
            PaymentSchedule::BiWeekly,
            PaymentSchedule::AcceleratedBiWeekly,
        ] {
            let payments: Vec<Money> = rates
                .iter()
                .map(|rate| payment(insured_loan(), schedule, 25, *rate).unwrap())
                .collect();

            for pair in payments.windows(2) {
                assert!(pair[1] > pair[0], "{schedule}: {} !> {}", pair[1], pair[0]);
            }
        }
    }

    #[test]
    fn test_longest_term_at_highest_rate() {
        let loan = Money::from_major(1_000_000);
        let result = payment(loan, PaymentSchedule::BiWeekly, 30, dec!(100));
        assert!(result.is_ok());
    }

    #[test]
    fn test_large_principal_at_highest_rate() {
        // 1e18 price with 30% down, uninsured
        let loan = Money::from_decimal(dec!(700_000_000_000_000_000));
        let bi_weekly = payment(loan, PaymentSchedule::BiWeekly, 30, dec!(100)).unwrap();

        // roughly loan / 26 at this rate and term
        assert!(bi_weekly > Money::from_decimal(dec!(26_900_000_000_000_000)));
        assert!(bi_weekly < Money::from_decimal(dec!(27_000_000_000_000_000)));

        let monthly = payment(loan, PaymentSchedule::Monthly, 30, dec!(100)).unwrap();
        let accelerated =
            payment(loan, PaymentSchedule::AcceleratedBiWeekly, 30, dec!(100)).unwrap();
        assert!(accelerated < monthly);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let loan = Money::from_major(120_000);

        let monthly = payment(loan, PaymentSchedule::Monthly, 10, Decimal::ZERO).unwrap();
        assert_eq!(monthly, Money::from_major(1_000));

        let accelerated =
            payment(loan, PaymentSchedule::AcceleratedBiWeekly, 10, Decimal::ZERO).unwrap();
        assert_eq!(accelerated, Money::from_major(500));
    }

    #[test]
    fn test_zero_term_is_calculation_error() {
        let result = payment(insured_loan(), PaymentSchedule::Monthly, 0, dec!(4.19));
        assert!(matches!(result, Err(CalculatorError::CalculationError { .. })));
    }
}
