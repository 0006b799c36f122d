pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod http;
pub mod insurance;
pub mod payments;
pub mod telemetry;
pub mod types;
pub mod validation;

// re-export key types
pub use calculator::{
    calculate, calculate_mortgage, MortgageCalculator, MortgagePipeline, PaymentQuote,
};
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result, ValidationError};
pub use insurance::{premium, InsuranceQuote};
pub use payments::{payment, AmortizationCalculator, PeriodicPayment};
pub use types::{MortgageRequest, PaymentSchedule};
pub use validation::{validate, MortgageParams, ValidationResult};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
