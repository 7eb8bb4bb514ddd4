// src/models/price.rs
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price in whole cents.
/// The backend sends decimals as strings ("3.50"), older payloads send numbers
/// (3.5) and the bundled catalog uses display strings ("$3.50"); all three parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {0:?}")]
pub struct PriceParseError(pub String);

impl Price {
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn from_f64(value: f64) -> Result<Self, PriceParseError> {
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so equality is already out of range
        if !value.is_finite() || value < 0.0 || cents >= i64::MAX as f64 {
            return Err(PriceParseError(value.to_string()));
        }
        Ok(Self {
            cents: cents as i64,
        })
    }

    /// Whole currency units, as integer JSON prices arrive.
    pub fn from_units(units: i64) -> Option<Self> {
        if units < 0 {
            return None;
        }
        units.checked_mul(100).map(Self::from_cents)
    }

    /// Wire form: `"3.50"`.
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal_string())
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().trim_start_matches('$').trim().replace(',', "");
        if cleaned.is_empty() {
            return Err(PriceParseError(s.to_string()));
        }
        let value = cleaned
            .parse::<f64>()
            .map_err(|_| PriceParseError(s.to_string()))?;
        Price::from_f64(value).map_err(|_| PriceParseError(s.to_string()))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a price as a number or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        if v < 0 {
            return Err(E::custom(format!("negative price {}", v)));
        }
        Price::from_units(v).ok_or_else(|| E::custom("price out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        i64::try_from(v)
            .ok()
            .and_then(Price::from_units)
            .ok_or_else(|| E::custom("price out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Price::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_wire_shape() {
        let from_string: Price = serde_json::from_str("\"3.50\"").unwrap();
        let from_float: Price = serde_json::from_str("3.5").unwrap();
        let from_display: Price = serde_json::from_str("\"$3.50\"").unwrap();
        let from_int: Price = serde_json::from_str("45").unwrap();
        assert_eq!(from_string, Price::from_cents(350));
        assert_eq!(from_float, from_string);
        assert_eq!(from_display, from_string);
        assert_eq!(from_int, Price::from_cents(4500));
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Price::from_cents(4250)).unwrap();
        assert_eq!(json, "\"42.50\"");
        assert_eq!(Price::from_cents(205).to_string(), "$2.05");
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!("".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!("-1.00".parse::<Price>().is_err());
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!("3.999".parse::<Price>().unwrap(), Price::from_cents(400));
        assert_eq!("1,250.00".parse::<Price>().unwrap(), Price::from_cents(125000));
    }

    #[test]
    fn out_of_range_prices_are_errors() {
        assert!(serde_json::from_str::<Price>("100000000000000000").is_err());
        assert!(serde_json::from_str::<Price>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Price>("1e300").is_err());
        assert!("1e300".parse::<Price>().is_err());
        assert_eq!(Price::from_units(i64::MAX / 100), Some(Price::from_cents(i64::MAX / 100 * 100)));
        assert_eq!(Price::from_units(i64::MAX / 100 + 1), None);
        let largest: Price = serde_json::from_str("92233720368547757").unwrap();
        assert_eq!(largest.cents(), 9_223_372_036_854_775_700);
    }
}
