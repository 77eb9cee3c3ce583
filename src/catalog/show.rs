/// Show records as delivered by the catalog.
///
/// These structures mirror the JSON format of the catalog's `/shows` endpoint.
/// Fields this crate does not model explicitly are kept in `extra`, so a
/// decoded record round-trips without losing data.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Stable catalog identifier of a show.
pub type ShowId = u64;

/// Status value that marks a show as still airing.
pub const RUNNING_STATUS: &str = "Running";

/// A single catalog entry representing a television program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    /// Unique, stable identifier assigned by the catalog
    pub id: ShowId,
    /// Display name of the show
    pub name: String,
    /// Classification such as "Scripted" or "Reality"
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Primary spoken language
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    /// Production status, e.g. "Running" or "Ended"
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Ordered genre labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// Official website of the show, if any
    #[serde(default)]
    pub official_site: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Schedule,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: Rating,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub image: Option<ShowImage>,
    /// HTML formatted summary, trusted as delivered by the catalog
    #[serde(default)]
    pub summary: Option<String>,
    /// Catalog page of the show
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Nominal episode runtime in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_runtime: Option<u32>,
    /// Premiere date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premiered: Option<String>,
    /// End date (YYYY-MM-DD), absent while still running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<String>,
    /// Any further catalog fields, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Show {
    /// Whether the show is still airing
    pub fn is_running(&self) -> bool {
        self.status == RUNNING_STATUS
    }
}

/// Reads an explicit `null` as the type's default value
///
/// `#[serde(default)]` alone only covers missing keys; the catalog also sends
/// `null` for free-text fields it has no value for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Weekly airing schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Local airing time, e.g. "21:00"; may be empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    /// Weekday names in airing order
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average user rating on a 0-10 scale
    pub average: Option<f64>,
}

/// Broadcasting network of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    pub country: Option<Country>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
}

/// Poster image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowImage {
    pub medium: String,
    pub original: String,
}
