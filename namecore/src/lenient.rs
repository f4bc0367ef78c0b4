use serde::{Deserialize, Deserializer};
use std::str::FromStr;

// Aggregates computed server side may arrive as numbers, numeric strings
// or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Number(T),
    Text(String),
    Null,
}

pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Number(value) => value,
        Lenient::Text(text) => text.trim().parse().unwrap_or_default(),
        Lenient::Null => T::default(),
    })
}
