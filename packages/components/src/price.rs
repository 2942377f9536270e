use crate::error::PriceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// A non-negative amount in baht, stored as satang.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_satang(satang: u64) -> Self {
        Price(satang)
    }

    pub fn from_baht(baht: u64) -> Self {
        Price(baht.saturating_mul(100))
    }

    pub fn satang(self) -> u64 {
        self.0
    }

    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }

    /// `฿95.00`
    pub fn display_baht(self) -> String {
        format!("฿{}", self)
    }

    /// Reads a JSON price for `owner`. Failures are logged and yield `None`,
    /// so the owner keeps its default price and the rest of the page renders.
    pub fn read_or_warn(value: &serde_json::Value, owner: &str) -> Option<Price> {
        match Price::try_from(value) {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::warn!(owner, error = %e, "Ignoring unreadable price");
                None
            }
        }
    }

    fn from_f64(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() || value < 0.0 || value > (u64::MAX / 100) as f64 {
            return Err(PriceError::OutOfRange(value.to_string()));
        }
        let satang = value * 100.0;
        if (satang - satang.round()).abs() > 1e-6 {
            return Err(PriceError::TooPrecise(value.to_string()));
        }
        Ok(Price(satang.round() as u64))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) if digits(whole) && digits(fraction) => (whole, fraction),
            None if digits(s) => (s, ""),
            _ => return Err(PriceError::Invalid(s.to_string())),
        };
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(s.to_string()));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| PriceError::OutOfRange(s.to_string()))?;
        let satang = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction.parse::<u64>().unwrap_or(0),
        };

        whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(satang))
            .map(Price)
            .ok_or_else(|| PriceError::OutOfRange(s.to_string()))
    }
}

impl TryFrom<&serde_json::Value> for Price {
    type Error = PriceError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => s.parse(),
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(baht) => baht
                    .checked_mul(100)
                    .map(Price)
                    .ok_or_else(|| PriceError::OutOfRange(n.to_string())),
                None => Price::from_f64(n.as_f64().unwrap_or(-1.0)),
            },
            other => Err(PriceError::Invalid(other.to_string())),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        Price(iter.fold(0u64, |acc, p| acc.saturating_add(p.0)))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Price::try_from(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("89".parse::<Price>().unwrap(), Price::from_satang(8900));
        assert_eq!("89.5".parse::<Price>().unwrap(), Price::from_satang(8950));
        assert_eq!(" 89.05 ".parse::<Price>().unwrap(), Price::from_satang(8905));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Price>(), Err(PriceError::Empty));
        assert!(matches!("-5".parse::<Price>(), Err(PriceError::Invalid(_))));
        assert!(matches!("1.234".parse::<Price>(), Err(PriceError::TooPrecise(_))));
        assert!(matches!("abc".parse::<Price>(), Err(PriceError::Invalid(_))));
        assert!(matches!("1.".parse::<Price>(), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_baht(95).to_string(), "95.00");
        assert_eq!(Price::from_baht(190).display_baht(), "฿190.00");
        assert_eq!(Price::from_satang(5).to_string(), "0.05");
    }

    #[test]
    fn test_json_forms() {
        let from_text: Price = serde_json::from_str("\"159\"").unwrap();
        let from_number: Price = serde_json::from_str("159").unwrap();
        let from_float: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(from_text, Price::from_baht(159));
        assert_eq!(from_number, Price::from_baht(159));
        assert_eq!(from_float, Price::from_satang(1250));
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"159.00\"");
    }

    #[test]
    fn test_number_and_string_agree_on_precision() {
        assert_eq!(
            serde_json::from_str::<Price>("12.35").unwrap(),
            "12.35".parse::<Price>().unwrap()
        );
        assert!(matches!(
            Price::try_from(&serde_json::json!(12.345)),
            Err(PriceError::TooPrecise(_))
        ));
        assert!(matches!(
            Price::try_from(&serde_json::json!("12.345")),
            Err(PriceError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_baht(95).times(2), Price::from_baht(45)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_baht(235));
    }
}
