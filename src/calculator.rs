use serde::Serialize;
use tracing::debug;

use crate::decimal::Money;
use crate::errors::Result;
use crate::insurance::{self, InsuranceQuote};
use crate::payments::{AmortizationCalculator, PeriodicPayment};
use crate::types::MortgageRequest;
use crate::validation::MortgageParams;

/// result of one run of the mortgage pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentQuote {
    pub request: MortgageRequest,
    pub insurance: InsuranceQuote,
    /// borrowed amount plus insurance premium
    pub mortgage_amount: Money,
    pub payment: PeriodicPayment,
}

impl PaymentQuote {
    /// amount due each period, rounded to cents
    pub fn payment_amount(&self) -> Money {
        self.payment.amount
    }
}

/// price a validated request: insurance premium, then the periodic payment
pub fn calculate(request: &MortgageRequest) -> Result<PaymentQuote> {
    let insurance = insurance::quote(request.property_price, request.down_payment)?;
    let mortgage_amount = request.borrowed_amount() + insurance.premium;

    let payment = AmortizationCalculator::new(request.payment_schedule).periodic_payment(
        mortgage_amount,
        request.amortization_years,
        request.annual_rate(),
    )?;

    debug!(
        premium = %insurance.premium,
        mortgage_amount = %mortgage_amount,
        payment = %payment.amount,
        total_paid = ?payment.total_paid(),
        "mortgage priced"
    );

    Ok(PaymentQuote {
        request: request.clone(),
        insurance,
        mortgage_amount,
        payment,
    })
}

/// validate raw parameters and price them
pub fn calculate_mortgage(params: &MortgageParams) -> Result<PaymentQuote> {
    let request = params.validate()?;
    calculate(&request)
}

/// the calculation pipeline as seen by a transport
pub trait MortgagePipeline: Send + Sync {
    fn calculate(&self, params: &MortgageParams) -> Result<PaymentQuote>;
}

/// default pipeline: validation, insurance, amortization
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageCalculator;

impl MortgageCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl MortgagePipeline for MortgageCalculator {
    fn calculate(&self, params: &MortgageParams) -> Result<PaymentQuote> {
        calculate_mortgage(params)
    }
}
