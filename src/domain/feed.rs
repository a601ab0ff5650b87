use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kinds of feed a spotted dairy animal tracks in its ration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    Grass,
    Hay,
    Cereal,
}

/// Quantities fed per feed kind since the last digestion cycle
/// Kept ordered so ration sums are deterministic.
pub type Ration = BTreeMap<Feed, f64>;

impl Feed {
    /// Milk coefficient applied to this feed during ration-weighted digestion
    pub fn milk_coefficient(&self) -> f64 {
        match self {
            Feed::Grass => 1.0,
            Feed::Hay => 0.8,
            Feed::Cereal => 1.5,
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::Grass => write!(f, "grass"),
            Feed::Hay => write!(f, "hay"),
            Feed::Cereal => write!(f, "cereal"),
        }
    }
}
