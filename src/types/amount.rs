use crate::types::errors::AmountError;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::error;

const CURRENCY_SYMBOL: &str = "$";
const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// A validated, finite monetary value.
///
/// Amounts are held as decimals so that sums shown in the summary never drift the way
/// binary floating point does. Any sign is allowed; whether a value counts towards income
/// or expenses is decided by the record's kind, not by the sign.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Formats the amount the way the summary cards show it, e.g. `$12.50` or `$-50.00`.
    pub fn currency(&self) -> String {
        let mut rounded = self.0.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CURRENCY_DECIMAL_PLACES);
        format!("{CURRENCY_SYMBOL}{rounded}")
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Amount> for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount SubAssign error: Overflow")
        }
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        if let Ok(parsed) = Decimal::from_str(value) {
            return Ok(Amount(parsed));
        }

        //NOTE: Number inputs may hand over exponent notation, plain parsing rejects it
        if value.contains(['e', 'E']) {
            return Decimal::from_scientific(value)
                .map(Amount)
                .map_err(|error| AmountError::InvalidFormat(format!("Value is not a finite number: {error}")));
        }

        let digits = value.trim_start_matches(['+', '-']);

        let is_plain_number = digits.chars().any(|c| c.is_ascii_digit())
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.matches('.').count() <= 1;

        if is_plain_number {
            return Err(AmountError::Overflow);
        }

        Err(AmountError::InvalidFormat(format!("Value is not a finite number: {value:?}")))
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::InvalidFormat(format!("Value is not a finite number: {value}")));
        }

        //NOTE: Display on f64 yields the shortest text that round-trips, which keeps 0.1 as 0.1
        Amount::from_str(&value.to_string())
            .or_else(|_| Decimal::from_f64(value).map(Amount).ok_or(AmountError::Overflow))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        //NOTE: Only values that read back exactly are written as numbers, the rest as decimal text
        match self.0.to_f64() {
            Some(value) if Decimal::from_str(&value.to_string()).is_ok_and(|parsed| parsed == self.0) => serializer.serialize_f64(value),
            _ => serializer.serialize_str(&self.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a finite number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Amount, E> {
        Amount::try_from(value).map_err(de::Error::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Amount, E> {
        Amount::from_str(value).map_err(de::Error::custom)
    }
}
