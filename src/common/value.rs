//! Cell values and their display rules.
//!
//! Every value that reaches an encoder is reduced to text. [`CellValue`] is the
//! tagged variant callers hand in (directly for heterogeneous rows, through a
//! [`Record`](crate::schema::Record) for typed ones), and [`CellValue::to_text`]
//! is the single place that decides how each variant is displayed.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date rendering used for [`CellValue::Date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamp rendering used for [`CellValue::DateTime`].
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Integral floats up to this magnitude are displayed without a fraction.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

/// A single value in a record or row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Missing value, displayed as an empty string
    #[default]
    Null,
    /// Text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Date and time without zone
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check whether this value is [`CellValue::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Render the value as display text.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => itoa::Buffer::new().format(*i).to_string(),
            CellValue::Number(f) => format_number(*f),
            CellValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            CellValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            CellValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        }
    }
}

/// Format a float for display.
///
/// Integral values print like integers (`10.0` becomes `10`), everything else
/// uses the shortest representation that round-trips.
fn format_number(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f.fract() == 0.0 && f.abs() < INTEGRAL_DISPLAY_LIMIT {
        // Exact: the magnitude check keeps the value inside i64 range
        return itoa::Buffer::new().format(f as i64).to_string();
    }
    ryu::Buffer::new().format_finite(f).to_string()
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(value: $t) -> Self {
                    CellValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => CellValue::Integer(i),
            // Kept as text so every digit survives
            Err(_) => CellValue::Text(itoa::Buffer::new().format(value).to_string()),
        }
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::from(value as u64)
    }
}

impl From<f32> for CellValue {
    /// Widens through the shortest `f32` decimal, so `0.1f32` displays as `0.1`.
    fn from(value: f32) -> Self {
        if !value.is_finite() {
            return CellValue::Number(f64::from(value));
        }
        let shortest = ryu::Buffer::new().format_finite(value).parse::<f64>();
        CellValue::Number(shortest.unwrap_or_else(|_| f64::from(value)))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CellValue {
    fn from(value: DateTime<Tz>) -> Self {
        CellValue::DateTime(value.naive_local())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    CellValue::from(u)
                } else {
                    n.as_f64().map_or(CellValue::Text(n.to_string()), CellValue::Number)
                }
            },
            Value::String(s) => CellValue::Text(s),
            other => CellValue::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_empty() {
        assert_eq!(CellValue::Null.to_text(), "");
        assert_eq!(CellValue::from(None::<i32>).to_text(), "");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(CellValue::from(10).to_text(), "10");
        assert_eq!(CellValue::from(-42i64).to_text(), "-42");
        assert_eq!(CellValue::from(10.0).to_text(), "10");
        assert_eq!(CellValue::from(2.5).to_text(), "2.5");
        assert_eq!(CellValue::from(0.1).to_text(), "0.1");
        assert_eq!(CellValue::from(f64::NAN).to_text(), "NaN");
        assert_eq!(CellValue::from(f64::NEG_INFINITY).to_text(), "-Infinity");
        assert_eq!(CellValue::from(u64::MAX).to_text(), "18446744073709551615");
        assert_eq!(CellValue::from(i64::MAX as u64).to_text(), "9223372036854775807");
    }

    #[test]
    fn test_single_precision_keeps_its_digits() {
        assert_eq!(CellValue::from(0.1f32).to_text(), "0.1");
        assert_eq!(CellValue::from(19.99f32).to_text(), "19.99");
        assert_eq!(CellValue::from(3.0f32).to_text(), "3");
        assert_eq!(CellValue::from(f32::INFINITY).to_text(), "Infinity");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::from(date).to_text(), "2024-03-09");

        let dt = date.and_hms_opt(7, 5, 0).unwrap();
        assert_eq!(CellValue::from(dt).to_text(), "2024-03-09 07:05:00");
    }

    #[test]
    fn test_bool_and_text() {
        assert_eq!(CellValue::from(true).to_text(), "true");
        assert_eq!(CellValue::from("A").to_text(), "A");
        assert_eq!(CellValue::from(Some("B")).to_text(), "B");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(CellValue::from(json!(null)), CellValue::Null);
        assert_eq!(CellValue::from(json!(7)), CellValue::Integer(7));
        assert_eq!(CellValue::from(json!(1.25)), CellValue::Number(1.25));
        assert_eq!(CellValue::from(json!("x")), CellValue::Text("x".into()));
        assert_eq!(CellValue::from(json!([1, 2])).to_text(), "[1,2]");
        assert_eq!(
            CellValue::from(json!(18446744073709551615u64)).to_text(),
            "18446744073709551615"
        );
    }
}
