//! Wire types of the catalog API
//!
//! List endpoints return [`ResourceList`] pages of [`NamedResource`]
//! summaries; detail endpoints return one of the typed records wrapped in
//! [`DetailRecord`].

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, ResourceKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// Summary records
// ============================================================================

/// Summary record returned by list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Self-reference URL of the detail endpoint
    pub url: String,
}

impl NamedResource {
    /// Create a summary record
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id taken from the last path segment of the self-reference URL
    ///
    /// `https://pokeapi.co/api/v2/type/12/` yields `Some(12)`.
    pub fn id(&self) -> Option<i64> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    /// Total size of the collection
    #[serde(default)]
    pub count: u64,
    /// URL of the next page; absent or empty on the final page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Summary records of this page
    pub results: Vec<NamedResource>,
}

impl ResourceList {
    /// Decode a page from a response body
    pub fn decode(body: &str) -> Result<Self> {
        decode_json(body)
    }
}

// ============================================================================
// Detail records
// ============================================================================

/// Full berry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Berry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub growth_time: i64,
    #[serde(default)]
    pub max_harvest: i64,
    #[serde(default)]
    pub natural_gift_power: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub smoothness: i64,
    #[serde(default)]
    pub soil_dryness: i64,
    #[serde(default)]
    pub firmness: JsonValue,
    #[serde(default)]
    pub flavors: JsonValue,
    #[serde(default)]
    pub item: JsonValue,
    #[serde(default)]
    pub natural_gift_type: JsonValue,
}

/// Full pokemon record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub abilities: JsonValue,
    #[serde(default)]
    pub forms: JsonValue,
    #[serde(default)]
    pub game_indices: JsonValue,
    #[serde(default)]
    pub held_items: JsonValue,
    #[serde(default)]
    pub location_area_encounters: String,
    #[serde(default)]
    pub moves: JsonValue,
    #[serde(default)]
    pub species: JsonValue,
    #[serde(default)]
    pub sprites: JsonValue,
    #[serde(default)]
    pub stats: JsonValue,
    #[serde(default)]
    pub types: JsonValue,
}

/// Full type record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub damage_relations: JsonValue,
    #[serde(default)]
    pub past_damage_relations: JsonValue,
    #[serde(default)]
    pub game_indices: JsonValue,
    #[serde(default)]
    pub generation: JsonValue,
    #[serde(default)]
    pub move_damage_class: JsonValue,
    #[serde(default)]
    pub names: JsonValue,
    #[serde(default)]
    pub pokemon: JsonValue,
    #[serde(default)]
    pub moves: JsonValue,
}

/// Detail record of any kind, as returned by the hydrator
#[derive(Debug, Clone, PartialEq)]
pub enum DetailRecord {
    Berry(Berry),
    Pokemon(Pokemon),
    Type(PokemonType),
}

impl DetailRecord {
    /// Decode the detail body of the given kind
    pub fn decode(kind: ResourceKind, body: &str) -> Result<Self> {
        Ok(match kind {
            ResourceKind::Berry => Self::Berry(decode_json(body)?),
            ResourceKind::Pokemon => Self::Pokemon(decode_json(body)?),
            ResourceKind::Type => Self::Type(decode_json(body)?),
        })
    }

    /// Kind of this record
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Berry(_) => ResourceKind::Berry,
            Self::Pokemon(_) => ResourceKind::Pokemon,
            Self::Type(_) => ResourceKind::Type,
        }
    }

    /// Resource name
    pub fn name(&self) -> &str {
        match self {
            Self::Berry(r) => &r.name,
            Self::Pokemon(r) => &r.name,
            Self::Type(r) => &r.name,
        }
    }

    /// Resource id
    pub fn id(&self) -> i64 {
        match self {
            Self::Berry(r) => r.id,
            Self::Pokemon(r) => r.id,
            Self::Type(r) => r.id,
        }
    }

    /// Field map of this record, keyed by column name
    pub fn to_object(&self) -> Result<JsonObject> {
        let value = match self {
            Self::Berry(r) => serde_json::to_value(r)?,
            Self::Pokemon(r) => serde_json::to_value(r)?,
            Self::Type(r) => serde_json::to_value(r)?,
        };
        match value {
            JsonValue::Object(map) => Ok(map),
            _ => Err(Error::decode("detail record did not serialize to an object")),
        }
    }
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::decode(e.to_string()))
}
