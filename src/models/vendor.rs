use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One directory entry as returned by `/api/vendors`.
///
/// The backend serialises spreadsheet rows, so numeric-looking cells (phone,
/// pincode) may arrive as JSON numbers and empty cells as `""`. Every text
/// field is normalised to `None` when blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub plot_info: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub building_info: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub photos: Option<String>,
    #[serde(default, deserialize_with = "optional_rating", skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub review_count: u32,
}

impl Vendor {
    /// Average rating, or `None` when the vendor has not been rated.
    /// A zero average counts as unrated.
    pub fn rating(&self) -> Option<f64> {
        self.average_rating.filter(|r| *r > 0.0)
    }

    pub fn sort_key(&self) -> f64 {
        self.rating().unwrap_or(0.0)
    }

    pub fn is_top_rated(&self) -> bool {
        self.rating().is_some_and(|r| r >= 4.5)
    }

    /// First entry of the comma-separated photo list.
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos
            .as_deref()
            .and_then(|photos| photos.split(',').next())
            .map(str::trim)
            .filter(|photo| !photo.is_empty())
    }

    /// Present address parts joined with `", "`, most specific first.
    pub fn address(&self) -> String {
        [
            &self.plot_info,
            &self.building_info,
            &self.street,
            &self.landmark,
            &self.area,
            &self.city,
            &self.state,
            &self.pincode,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_text))
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let rating = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.map_or(0, |c| u32::try_from(c).unwrap_or(u32::MAX)))
}
