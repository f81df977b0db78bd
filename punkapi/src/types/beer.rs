//! Beer records returned by the `/beers` endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Numeric identifier for a beer.
pub type BeerID = u64;

/// A beer as returned by the API.
///
/// Only the commonly used fields are typed; everything else the service
/// sends (method, ingredients, volume, ...) is kept untouched in `extra`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Beer {
    /// Unique numeric beer identifier.
    pub id: BeerID,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,

    /// First brew date as reported by the service, usually `mm/yyyy`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_brewed: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Alcohol by volume, percent.
    #[serde(default)]
    pub abv: Option<f64>,

    /// International bitterness units.
    #[serde(default)]
    pub ibu: Option<f64>,

    /// European brewery convention colour.
    #[serde(default)]
    pub ebc: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub food_pairing: Vec<String>,

    /// Every field not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
