//! Tolerant decoding for fields the server may leave empty.
//!
//! [`option`] covers undocumented fields: they have been observed in
//! responses but have no published contract, so a missing value, a `null`,
//! or a value of an unexpected JSON type all decode to `None` instead of
//! failing the surrounding record.
//!
//! [`or_default`] covers documented fields the server sends as `null` when
//! they do not apply, e.g. the upload status of a link attachment. `null`
//! decodes to the type's default; any other mismatch is still an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring undocumented field with unexpected shape");
            Ok(None)
        }
    }
}
