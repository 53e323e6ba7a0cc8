//! Fixed-point amounts
//!
//! Every amount the dashboard exposes carries exactly [`AMOUNT_SCALE`]
//! fractional digits. Raw collaborator values are rounded once, half away
//! from zero, when they enter an [`Amount`]; sums of normalized amounts
//! are exact, so folding UTXO lists never accumulates rounding drift.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{BackofficeError, Result};

/// Number of fractional digits carried by every exposed amount
pub const AMOUNT_SCALE: u32 = 8;

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Round a raw decimal to [`AMOUNT_SCALE`] digits and pin its scale.
///
/// Idempotent: normalizing an already normalized value returns it unchanged,
/// including its textual form. Values too large to carry 8 fractional
/// digits in a 96-bit mantissa are rejected.
pub fn normalize(raw: Decimal) -> Result<Decimal> {
    let mut value = raw.round_dp_with_strategy(AMOUNT_SCALE, ROUNDING);
    value.rescale(AMOUNT_SCALE);
    if value.scale() != AMOUNT_SCALE {
        return Err(BackofficeError::internal(format!("amount out of range: {raw}")));
    }
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    Ok(value)
}

/// Decimal amount normalized to 8 fractional digits
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero, at full scale
    pub fn zero() -> Self {
        Self(Decimal::new(0, AMOUNT_SCALE))
    }

    /// Normalize a raw decimal
    pub fn from_decimal(raw: Decimal) -> Result<Self> {
        normalize(raw).map(Self)
    }

    /// Underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Add two amounts, failing on overflow
    pub fn checked_add(self, other: Self) -> Result<Self> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| BackofficeError::internal("amount overflow"))?;
        Self::from_decimal(sum)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Amount {
    type Err = BackofficeError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = Decimal::from_str(s)
            .map_err(|e| BackofficeError::invalid(format!("invalid amount {s:?}: {e}")))?;
        Self::from_decimal(raw)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BackofficeError;

    fn try_from(raw: Decimal) -> Result<Self> {
        Self::from_decimal(raw)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::from_decimal(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_always_has_eight_digits() {
        assert_eq!(Amount::zero().to_string(), "0.00000000");
        assert_eq!(amount("1.5").to_string(), "1.50000000");
        assert_eq!(amount("21000000").to_string(), "21000000.00000000");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(amount("0.000000005").to_string(), "0.00000001");
        assert_eq!(amount("0.000000015").to_string(), "0.00000002");
        assert_eq!(amount("-0.000000005").to_string(), "-0.00000001");
        assert_eq!(amount("1.234567894").to_string(), "1.23456789");
    }

    #[test]
    fn test_checked_add_is_exact() {
        let sum = amount("1.23456789").checked_add(amount("0.00000001")).unwrap();
        assert_eq!(sum.to_string(), "1.23456790");
    }

    #[test]
    fn test_values_without_room_for_eight_digits_are_rejected() {
        let large = amount("500000000000000000000");
        assert_eq!(large.as_decimal().scale(), AMOUNT_SCALE);

        assert!(matches!(
            "1000000000000000000000".parse::<Amount>(),
            Err(BackofficeError::Internal { .. })
        ));
        assert!(matches!(
            large.checked_add(large),
            Err(BackofficeError::Internal { .. })
        ));
        assert!(serde_json::from_str::<Amount>("\"1000000000000000000000\"").is_err());
    }

    #[test]
    fn test_zero_has_full_scale() {
        assert_eq!(Amount::zero().as_decimal().scale(), AMOUNT_SCALE);
        assert_eq!(Amount::zero(), amount("0"));
    }

    #[test]
    fn test_negative_detection() {
        assert!(amount("-0.5").is_negative());
        assert!(!Amount::zero().is_negative());
        assert!(!amount("-0.000000001").is_negative());
        assert_eq!(amount("-0.000000001").to_string(), "0.00000000");
    }

    #[test]
    fn test_serde_uses_fixed_string() {
        let json = serde_json::to_string(&amount("0.00000001")).unwrap();
        assert_eq!(json, "\"0.00000001\"");

        let back: Amount = serde_json::from_str("\"2.123456789\"").unwrap();
        assert_eq!(back.to_string(), "2.12345679");
    }

    #[test]
    fn test_invalid_text_is_rejected() {
        assert!(matches!(
            "not-a-number".parse::<Amount>(),
            Err(BackofficeError::Invalid { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(mantissa in any::<i64>(), scale in 0u32..=18) {
            let raw = Decimal::new(mantissa, scale);
            let once = normalize(raw).unwrap();
            let twice = normalize(once).unwrap();
            prop_assert_eq!(once, twice);
            prop_assert_eq!(once.to_string(), twice.to_string());
            prop_assert_eq!(once.scale(), AMOUNT_SCALE);
        }

        #[test]
        fn prop_sum_of_normalized_needs_no_rounding(
            values in proptest::collection::vec((0i64..=2_100_000_000_000_000, 0u32..=12), 0..32)
        ) {
            let mut total = Amount::zero();
            let mut exact = Decimal::ZERO;
            for (mantissa, scale) in values {
                let a = Amount::from_decimal(Decimal::new(mantissa, scale)).unwrap();
                exact += a.as_decimal();
                total = total.checked_add(a).unwrap();
            }
            prop_assert_eq!(total.as_decimal(), exact);
            prop_assert_eq!(normalize(exact).unwrap(), total.as_decimal());
        }
    }
}
