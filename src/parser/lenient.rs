//! Tolerant field readers for log records.
//!
//! Loggers write `null` for unset values and sometimes emit integers as
//! floats (`2.0`). Neither should cost the whole record, so these readers
//! map `null` to the field's default and coerce any JSON number into the
//! integer type the schema uses.

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// `null` reads as `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number as an optional signed index; `null` reads as `None`
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.map(|n| number_to_i64(&n)))
}

/// Any JSON number as a non-negative level; `null` reads as 0
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?
        .map_or(0, |n| number_to_i64(&n).clamp(0, i64::from(u32::MAX)) as u32))
}

/// Saturating conversion; fractional values are truncated toward zero
fn number_to_i64(n: &Number) -> i64 {
    if let Some(value) = n.as_i64() {
        value
    } else if n.is_u64() {
        i64::MAX
    } else {
        n.as_f64().map_or(0, |value| value as i64)
    }
}
