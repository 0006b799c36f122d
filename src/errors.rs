use thiserror::Error;

/// first failed check on a mortgage request, in validation order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Property price is missing or invalid.")]
    MissingPropertyPrice,

    #[error("Down payment is missing or invalid.")]
    MissingDownPayment,

    #[error("Annual interest rate is missing or invalid.")]
    MissingInterestRate,

    #[error("Amortization period is missing or invalid.")]
    MissingAmortizationPeriod,

    #[error("Payment schedule is missing.")]
    MissingPaymentSchedule,

    #[error("Payment schedule must be 'accelerated bi-weekly', 'bi-weekly', or 'monthly'.")]
    UnknownPaymentSchedule,

    #[error("Property price, down payment, and interest rate must be positive.")]
    NegativeAmount,

    #[error("Annual interest rate must be less than or equal to 100.")]
    InterestRateTooHigh,

    #[error("Property prices above $1 million must have at least 20% down payment.")]
    InsufficientDownPaymentAboveOneMillion,

    #[error("Amortization period must be in 5-year increments between 5 and 30 years.")]
    InvalidAmortizationPeriod,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Down payment must be at least 5% of property price.")]
    InsufficientDownPayment,

    #[error("calculation error: {message}")]
    CalculationError { message: String },
}

impl CalculatorError {
    pub(crate) fn calculation(message: impl Into<String>) -> Self {
        CalculatorError::CalculationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_transparently() {
        let err: CalculatorError = ValidationError::MissingPaymentSchedule.into();
        assert_eq!(err.to_string(), "Payment schedule is missing.");
    }

    #[test]
    fn test_insurance_floor_message() {
        assert_eq!(
            CalculatorError::InsufficientDownPayment.to_string(),
            "Down payment must be at least 5% of property price."
        );
    }
}
