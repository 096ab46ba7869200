use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Top-level response object from the makes feed: `{"Makes": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MakesResponse {
    #[serde(rename = "Makes")]
    pub makes: Vec<CarMake>,
}

/// One manufacturer record from the source feed. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CarMake {
    #[serde(rename = "make_id")]
    pub id: String,
    #[serde(rename = "make_display")]
    pub display_name: String,
    /// The feed encodes this as an integer flag, nonzero = common.
    #[serde(rename = "make_is_common", deserialize_with = "int_flag")]
    pub is_common: bool,
    /// Grouping key. The empty string is a legal, distinct country.
    #[serde(rename = "make_country")]
    pub origin_country: String,
}

fn int_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let flag = i64::deserialize(deserializer)?;
    Ok(flag != 0)
}

/// Per-country count of common and uncommon makes. The country name is
/// stored redundantly so each tally serializes standalone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTally {
    pub country: String,
    pub uncommon_makes: u32,
    pub common_makes: u32,
}

impl CountryTally {
    pub fn new(country: String) -> Self {
        Self {
            country,
            uncommon_makes: 0,
            common_makes: 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.common_makes + self.uncommon_makes
    }
}

/// Output of the transform stage: the aggregate map plus the outcome of
/// the recompute-and-compare consistency check.
#[derive(Debug, Clone)]
pub struct TallyResult {
    pub tallies: HashMap<String, CountryTally>,
    pub verified: bool,
}

impl TallyResult {
    /// Rows for serialization, sorted by country name so the output file
    /// is stable across runs regardless of map iteration order.
    pub fn sorted_rows(&self) -> Vec<&CountryTally> {
        let mut rows: Vec<&CountryTally> = self.tallies.values().collect();
        rows.sort_by(|a, b| a.country.cmp(&b.country));
        rows
    }
}
