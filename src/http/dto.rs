use serde::{Deserialize, Serialize};

use crate::calculator::PaymentQuote;

/// POST /api/v1/calculate-mortgage success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateMortgageResponse {
    pub payment: f64,
}

impl From<&PaymentQuote> for CalculateMortgageResponse {
    fn from(quote: &PaymentQuote) -> Self {
        CalculateMortgageResponse {
            payment: quote.payment_amount().to_f64(),
        }
    }
}

/// error body shared by every failure response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse { error: error.into() }
    }
}
