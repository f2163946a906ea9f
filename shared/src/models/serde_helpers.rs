//! Serde helpers for presence-tracked fields

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicit null".
///
/// Use together with `#[serde(default)]`:
/// - key absent → `None`
/// - key present with `null` → `Some(None)`
/// - key present with a value → `Some(Some(value))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
