use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};

/// payment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentSchedule {
    /// 12 payments a year
    #[serde(rename = "m")]
    Monthly,
    /// 26 payments a year, amortized over 26 periods
    #[serde(rename = "bw")]
    BiWeekly,
    /// 26 payments a year, each half the monthly payment
    #[serde(rename = "abw")]
    AcceleratedBiWeekly,
}

impl PaymentSchedule {
    /// wire code used by the web form
    pub fn code(&self) -> &'static str {
        match self {
            PaymentSchedule::Monthly => "m",
            PaymentSchedule::BiWeekly => "bw",
            PaymentSchedule::AcceleratedBiWeekly => "abw",
        }
    }

    /// periods per year used by the amortization formula
    ///
    /// accelerated bi-weekly amortizes on the monthly basis and halves the result
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentSchedule::BiWeekly => 26,
            PaymentSchedule::Monthly | PaymentSchedule::AcceleratedBiWeekly => 12,
        }
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// unrecognized payment schedule code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScheduleCode(pub String);

impl FromStr for PaymentSchedule {
    type Err = UnknownScheduleCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(PaymentSchedule::Monthly),
            "bw" => Ok(PaymentSchedule::BiWeekly),
            "abw" => Ok(PaymentSchedule::AcceleratedBiWeekly),
            other => Err(UnknownScheduleCode(other.to_string())),
        }
    }
}

/// a validated mortgage request
///
/// only built by the validator, so every field already satisfies the lending rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MortgageRequest {
    pub property_price: Money,
    pub down_payment: Money,
    /// annual rate as a percentage figure, e.g. 4.19
    pub annual_interest_rate: Decimal,
    pub amortization_years: u32,
    pub payment_schedule: PaymentSchedule,
}

impl MortgageRequest {
    /// amount borrowed before insurance
    pub fn borrowed_amount(&self) -> Money {
        self.property_price - self.down_payment
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percent(self.annual_interest_rate)
    }
}
