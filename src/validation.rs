use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::str::FromStr;

use crate::decimal::Money;
use crate::errors::ValidationError;
use crate::types::{MortgageRequest, PaymentSchedule};

/// outcome of validating mortgage parameters
pub type ValidationResult = std::result::Result<MortgageRequest, ValidationError>;

const MAX_INTEREST_RATE: Decimal = dec!(100);
const LARGE_PROPERTY_MIN_DOWN_RATIO: Decimal = dec!(0.20);
const AMORTIZATION_STEP_YEARS: Decimal = dec!(5);
const MIN_AMORTIZATION_YEARS: Decimal = dec!(5);
const MAX_AMORTIZATION_YEARS: Decimal = dec!(30);

/// raw mortgage parameters as submitted, parsed but not yet checked
///
/// numeric fields are `None` when absent, null, blank, or not a number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MortgageParams {
    pub property_price: Option<Decimal>,
    pub down_payment: Option<Decimal>,
    pub annual_interest_rate: Option<Decimal>,
    pub amortization_period: Option<Decimal>,
    pub payment_schedule: Option<String>,
}

impl MortgageParams {
    /// build from a json body using the form's field names
    pub fn from_json(body: &Value) -> Self {
        Self {
            property_price: body.get("propertyPrice").and_then(parse_numeric),
            down_payment: body.get("downPayment").and_then(parse_numeric),
            annual_interest_rate: body.get("annualInterestRate").and_then(parse_numeric),
            amortization_period: body.get("amortizationPeriod").and_then(parse_numeric),
            payment_schedule: body.get("paymentSchedule").and_then(parse_schedule_code),
        }
    }

    /// check every rule in order and build the typed request
    ///
    /// the first failing rule wins, errors are never aggregated
    pub fn validate(&self) -> ValidationResult {
        use ValidationError::*;

        let property_price = present(self.property_price).ok_or(MissingPropertyPrice)?;
        let down_payment = present(self.down_payment).ok_or(MissingDownPayment)?;
        let interest_rate = present(self.annual_interest_rate).ok_or(MissingInterestRate)?;
        let amortization = present(self.amortization_period).ok_or(MissingAmortizationPeriod)?;

        let schedule_code = self
            .payment_schedule
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or(MissingPaymentSchedule)?;
        let payment_schedule =
            PaymentSchedule::from_str(schedule_code).map_err(|_| UnknownPaymentSchedule)?;

        if property_price.is_sign_negative()
            || down_payment.is_sign_negative()
            || interest_rate.is_sign_negative()
        {
            return Err(NegativeAmount);
        }

        if interest_rate > MAX_INTEREST_RATE {
            return Err(InterestRateTooHigh);
        }

        if property_price > Money::ONE_MILLION.as_decimal()
            && down_payment < property_price * LARGE_PROPERTY_MIN_DOWN_RATIO
        {
            return Err(InsufficientDownPaymentAboveOneMillion);
        }

        let amortization_years = amortization_years(amortization).ok_or(InvalidAmortizationPeriod)?;

        Ok(MortgageRequest {
            property_price: Money::from_decimal(property_price),
            down_payment: Money::from_decimal(down_payment),
            annual_interest_rate: interest_rate,
            amortization_years,
            payment_schedule,
        })
    }
}

impl TryFrom<&MortgageParams> for MortgageRequest {
    type Error = ValidationError;

    fn try_from(params: &MortgageParams) -> ValidationResult {
        params.validate()
    }
}

/// validate mortgage parameters
pub fn validate(params: &MortgageParams) -> ValidationResult {
    params.validate()
}

/// coerce a json value into a decimal
///
/// numbers and numeric strings (plain or scientific) parse; anything else is `None`
pub fn parse_numeric(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal_literal(&n.to_string()),
        Value::String(s) => parse_decimal_literal(s.trim()),
        _ => None,
    }
}

// digit separators are rust syntax, not a number the form can submit
fn parse_decimal_literal(literal: &str) -> Option<Decimal> {
    if literal.is_empty() || literal.contains('_') {
        return None;
    }

    Decimal::from_str(literal)
        .or_else(|_| Decimal::from_scientific(literal))
        .ok()
}

fn parse_schedule_code(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

// zero counts as missing
fn present(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

fn amortization_years(period: Decimal) -> Option<u32> {
    if period < MIN_AMORTIZATION_YEARS
        || period > MAX_AMORTIZATION_YEARS
        || !(period % AMORTIZATION_STEP_YEARS).is_zero()
    {
        return None;
    }
    period.to_u32()
}
