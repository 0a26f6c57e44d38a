//! Golden Leaf API Response Models
//!
//! Wire shapes returned by `/api/product/category/{id}`. They live only long
//! enough to be mapped into domain products.

use serde::{Deserialize, Deserializer};

/// Product record as sent by the catalog API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartialProduct {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "number_or_numeric_text")]
    pub unit_cost: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Integer keys come through as numbers, but ids are carried as text
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

/// Decimal columns may be serialized as strings ("12.50")
fn number_or_numeric_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let cost = match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom(format!("unit_cost out of range: {}", n)))?,
        TextOrNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("unit_cost is not a number: {:?}", s)))?,
    };

    // "NaN" and "inf" parse as f64 but are not decimal prices
    if !cost.is_finite() {
        return Err(serde::de::Error::custom(format!("unit_cost is not finite: {}", cost)));
    }

    Ok(cost)
}
