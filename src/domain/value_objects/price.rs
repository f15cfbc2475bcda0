//! Decimal prices.
//!
//! The API serializes decimal fields as strings (`"199.00"`) but accepts and
//! occasionally returns plain numbers. Prices are held as integer cents so
//! totals and display never go through float rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative amount in THB, stored as cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

/// Error returned when a price string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {0:?}")]
pub struct InvalidPrice(pub String);

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl FromStr for Price {
    type Err = InvalidPrice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || InvalidPrice(s.to_string());

        if raw.is_empty() || raw.starts_with('-') {
            return Err(invalid());
        }

        let (whole, frac) = match raw.split_once('.') {
            Some((w, f)) => (w, f),
            None => (raw, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Two decimal places; extra digits are truncated the way the API's
        // DecimalField(decimal_places=2) would reject them anyway.
        let mut frac_digits = frac.chars().take(2).collect::<String>();
        while frac_digits.len() < 2 {
            frac_digits.push('0');
        }
        let frac: i64 = frac_digits.parse().map_err(|_| invalid())?;

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawPrice::deserialize(deserializer)? {
            RawPrice::Text(s) => s.parse().map_err(serde::de::Error::custom),
            RawPrice::Integer(n) => i64::try_from(n)
                .ok()
                .and_then(|n| n.checked_mul(100))
                .map(Price)
                .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {}", n))),
            RawPrice::Float(f) if f.is_finite() && f >= 0.0 => {
                format!("{:.2}", f).parse().map_err(serde::de::Error::custom)
            }
            RawPrice::Float(f) => Err(serde::de::Error::custom(format!("invalid price: {}", f))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("199.00", 19900 ; "two decimals")]
    #[test_case("199", 19900 ; "whole number")]
    #[test_case("12.5", 1250 ; "one decimal")]
    #[test_case(".75", 75 ; "no whole part")]
    #[test_case(" 3.999 ", 399 ; "extra digits truncated")]
    fn test_parse(input: &str, cents: i64) {
        assert_eq!(input.parse::<Price>().unwrap().cents(), cents);
    }

    #[test_case("" ; "empty")]
    #[test_case("-1" ; "negative")]
    #[test_case("abc" ; "letters")]
    #[test_case("1.2.3" ; "two dots")]
    #[test_case("." ; "lone dot")]
    fn test_parse_rejects(input: &str) {
        assert!(input.parse::<Price>().is_err());
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::from_cents(19905).to_string(), "199.05");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_deserialize_string_and_number() {
        let from_str: Price = serde_json::from_str("\"45.50\"").unwrap();
        let from_int: Price = serde_json::from_str("45").unwrap();
        let from_float: Price = serde_json::from_str("45.5").unwrap();

        assert_eq!(from_str.cents(), 4550);
        assert_eq!(from_int.cents(), 4500);
        assert_eq!(from_float.cents(), 4550);
    }

    #[test]
    fn test_serialize_as_decimal_string() {
        let json = serde_json::to_string(&Price::from_cents(19900)).unwrap();
        assert_eq!(json, "\"199.00\"");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::from_cents(19900).times(3).cents(), 59700);
    }
}
