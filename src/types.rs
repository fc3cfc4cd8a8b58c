use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::sampler::round2;

/// Time-of-use pricing band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    Sharp,
    Peak,
    Flat,
    Valley,
    DeepValley,
}

impl Band {
    pub const ALL: [Band; 5] = [Band::Sharp, Band::Peak, Band::Flat, Band::Valley, Band::DeepValley];
}

/// Report granularity: `monthly` lists days, `yearly` lists months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Monthly,
    Yearly,
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(ReportType::Monthly),
            "yearly" => Ok(ReportType::Yearly),
            other => Err(format!("Unknown report type: {}", other)),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Monthly => write!(f, "monthly"),
            ReportType::Yearly => write!(f, "yearly"),
        }
    }
}

/// One value per band. Serializes with PascalCase keys so it can be
/// flattened under a prefix (`load` + `Sharp` -> `loadSharp`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bands {
    pub sharp: f64,
    pub peak: f64,
    pub flat: f64,
    pub valley: f64,
    pub deep_valley: f64,
}

impl Bands {
    pub const fn new(sharp: f64, peak: f64, flat: f64, valley: f64, deep_valley: f64) -> Self {
        Self {
            sharp,
            peak,
            flat,
            valley,
            deep_valley,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Band) -> f64) -> Self {
        Self {
            sharp: f(Band::Sharp),
            peak: f(Band::Peak),
            flat: f(Band::Flat),
            valley: f(Band::Valley),
            deep_valley: f(Band::DeepValley),
        }
    }

    pub fn get(&self, band: Band) -> f64 {
        match band {
            Band::Sharp => self.sharp,
            Band::Peak => self.peak,
            Band::Flat => self.flat,
            Band::Valley => self.valley,
            Band::DeepValley => self.deep_valley,
        }
    }

    /// Sum across all bands, rounded to 2 decimals.
    pub fn total(&self) -> f64 {
        round2(Band::ALL.iter().map(|band| self.get(*band)).sum())
    }
}

/// A band group together with its derived `Total`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BandSeries {
    #[serde(flatten)]
    pub bands: Bands,
    pub total: f64,
}

impl BandSeries {
    pub fn new(bands: Bands) -> Self {
        Self {
            total: bands.total(),
            bands,
        }
    }
}

impl From<Bands> for BandSeries {
    fn from(bands: Bands) -> Self {
        Self::new(bands)
    }
}
