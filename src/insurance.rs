use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};

/// legal minimum down payment ratio for an insurable mortgage
pub const MIN_DOWN_PAYMENT_RATIO: Decimal = dec!(0.05);

/// premium tiers keyed by the lower bound of the down payment ratio
///
/// a tier covers `[min_ratio, next tier's min_ratio)`; the last tier is open-ended
const PREMIUM_TIERS: [InsuranceTier; 4] = [
    InsuranceTier { min_ratio: MIN_DOWN_PAYMENT_RATIO, premium_rate: dec!(0.04) },
    InsuranceTier { min_ratio: dec!(0.10), premium_rate: dec!(0.031) },
    InsuranceTier { min_ratio: dec!(0.15), premium_rate: dec!(0.028) },
    InsuranceTier { min_ratio: dec!(0.20), premium_rate: dec!(0) },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InsuranceTier {
    min_ratio: Decimal,
    premium_rate: Decimal,
}

/// default insurance applied to one mortgage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsuranceQuote {
    pub down_payment_ratio: Rate,
    pub premium_rate: Rate,
    /// property price less down payment, the base the premium rate applies to
    pub insured_amount: Money,
    pub premium: Money,
}

impl InsuranceQuote {
    pub fn is_insured(&self) -> bool {
        !self.premium.is_zero()
    }
}

/// price the default insurance for a purchase
///
/// fails with `InsufficientDownPayment` below the 5% floor
pub fn quote(property_price: Money, down_payment: Money) -> Result<InsuranceQuote> {
    let down_payment_ratio = down_payment
        .ratio_to(property_price)
        .ok_or_else(|| CalculatorError::calculation("property price cannot be zero"))?;

    let tier = tier_for(down_payment_ratio).ok_or(CalculatorError::InsufficientDownPayment)?;

    let insured_amount = property_price - down_payment;
    let premium_rate = Rate::from_decimal(tier.premium_rate);

    Ok(InsuranceQuote {
        down_payment_ratio,
        premium_rate,
        insured_amount,
        premium: insured_amount.apply(premium_rate),
    })
}

/// default insurance premium, zero at 20% down or more
pub fn premium(property_price: Money, down_payment: Money) -> Result<Money> {
    quote(property_price, down_payment).map(|q| q.premium)
}

fn tier_for(ratio: Rate) -> Option<InsuranceTier> {
    PREMIUM_TIERS
        .iter()
        .rev()
        .find(|tier| ratio.as_decimal() >= tier.min_ratio)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price() -> Money {
        Money::from_major(300_000)
    }

    #[test]
    fn test_premium_tiers() {
        // 5% down -> 4.0% of 285,000
        assert_eq!(premium(price(), Money::from_major(15_000)).unwrap(), Money::from_major(11_400));

        // 9.99% down still in the lowest tier
        let q = quote(price(), Money::from_major(29_970)).unwrap();
        assert_eq!(q.premium_rate, Rate::from_bps(400));

        // 10% down -> 3.1% of 270,000
        assert_eq!(premium(price(), Money::from_major(30_000)).unwrap(), Money::from_major(8_370));

        // 14% down -> 3.1% of 258,000
        assert_eq!(premium(price(), Money::from_major(42_000)).unwrap(), Money::from_major(7_998));

        // 15% down -> 2.8% of 255,000
        assert_eq!(premium(price(), Money::from_major(45_000)).unwrap(), Money::from_major(7_140));

        // 19.99% down
        let q = quote(price(), Money::from_major(59_970)).unwrap();
        assert_eq!(q.premium_rate, Rate::from_bps(280));

        // 20% down and above is uninsured
        assert_eq!(premium(price(), Money::from_major(60_000)).unwrap(), Money::ZERO);
        assert_eq!(premium(price(), Money::from_major(150_000)).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_minimum_down_payment_floor() {
        // exactly 5% is insurable
        assert!(premium(price(), Money::from_major(15_000)).is_ok());

        // 4.99% fails
        let result = premium(price(), Money::from_major(14_970));
        assert_eq!(result, Err(CalculatorError::InsufficientDownPayment));

        // 1.33% fails
        let result = premium(price(), Money::from_major(4_000));
        assert_eq!(result, Err(CalculatorError::InsufficientDownPayment));
    }

    #[test]
    fn test_quote_details() {
        let q = quote(price(), Money::from_major(42_000)).unwrap();

        assert_eq!(q.down_payment_ratio.as_decimal(), dec!(0.14));
        assert_eq!(q.premium_rate.as_decimal(), dec!(0.031));
        assert_eq!(q.insured_amount, Money::from_major(258_000));
        assert!(q.is_insured());

        let q = quote(price(), Money::from_major(60_000)).unwrap();
        assert!(!q.is_insured());
    }

    #[test]
    fn test_down_payment_above_price() {
        let q = quote(price(), Money::from_major(400_000)).unwrap();
        assert_eq!(q.premium, Money::ZERO);
        assert!(q.insured_amount.is_negative());
    }

    #[test]
    fn test_zero_price_is_calculation_error() {
        let result = premium(Money::ZERO, Money::from_major(1_000));
        assert!(matches!(result, Err(CalculatorError::CalculationError { .. })));
    }
}
