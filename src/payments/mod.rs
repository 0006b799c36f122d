pub mod amortization;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::decimal::{Money, Rate};
use crate::types::PaymentSchedule;

pub use amortization::{payment, AmortizationCalculator};

/// payment due each period under a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodicPayment {
    pub schedule: PaymentSchedule,
    pub payments_per_year: u32,
    pub total_payments: u32,
    pub periodic_rate: Rate,
    /// rounded to cents
    pub amount: Money,
}

impl PeriodicPayment {
    /// total paid over the full amortization period, None on overflow
    pub fn total_paid(&self) -> Option<Money> {
        let payments_made = match self.schedule {
            // every two weeks for the same number of years
            PaymentSchedule::AcceleratedBiWeekly => {
                self.total_payments / PaymentSchedule::Monthly.payments_per_year()
                    * PaymentSchedule::BiWeekly.payments_per_year()
            }
            _ => self.total_payments,
        };
        self.amount
            .as_decimal()
            .checked_mul(Decimal::from(payments_made))
            .map(Money::from_decimal)
    }
}
