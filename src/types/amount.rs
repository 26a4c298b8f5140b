use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Exact decimal amount carried by a transaction.
///
/// Amounts keep the scale they were written with, so `"5500.50"` renders back
/// as `5500.50`. Values that cannot be held without rounding are rejected.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    /// Adds two amounts, or returns `None` when the exact result does not fit.
    ///
    /// `Decimal` rounds a sum that needs more than 28 significant digits by
    /// dropping fractional digits, which shows up as a smaller scale than the
    /// operands carried.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        let sum = self.0.checked_add(rhs.0)?;

        if sum.scale() < self.0.scale().max(rhs.0.scale()) {
            return None;
        }

        Some(Amount(sum))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        Ok(Amount(Decimal::from_str_exact(value)?))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Amount::from_str(&value).map_err(de::Error::custom)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
