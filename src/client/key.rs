//! Cache-key composition from a base name and request parameters.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Appends `?k1=v1&k2=v2` to `base`, with parameters sorted by name so the
/// same parameter set always yields the same key. No parameters: `base`
/// unchanged. A repeated name keeps its last value.
///
/// Values are not URL-encoded; a value containing `&` or `=` can collide
/// with a different parameter set.
pub fn compose_cache_key<I, K, V>(base: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Display,
{
    let sorted: BTreeMap<String, String> = params
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect();

    if sorted.is_empty() {
        return base.to_string();
    }

    let query = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}
