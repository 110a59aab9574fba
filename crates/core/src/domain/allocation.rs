//! Strategic (benchmark) allocation types.
//!
//! Class weights are absolute portfolio percentages. Region and bucket tables are
//! proportions *within* their parent class and each sums to 100 on its own; multiply by
//! the parent class weight / 100 to get portfolio-level percentages
//! (see [`crate::risk::benchmark_weights`]).

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Defensivo,
    Moderado,
    Crecimiento,
    Agresivo,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Defensivo => "defensivo",
            RiskBand::Moderado => "moderado",
            RiskBand::Crecimiento => "crecimiento",
            RiskBand::Agresivo => "agresivo",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Investable universe the benchmark is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Universe {
    #[default]
    Global,
    SoloChile,
}

impl Universe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Universe::Global => "global",
            Universe::SoloChile => "solo_chile",
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Universe {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Universe::Global),
            "solo_chile" | "chile" => Ok(Universe::SoloChile),
            other => Err(InputError::new(
                "universe",
                format!("expected \"global\" or \"solo_chile\", got {other:?}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWeights {
    pub equities: f64,
    pub fixed_income: f64,
    pub alternatives: f64,
    pub cash: f64,
}

impl ClassWeights {
    pub fn total(&self) -> f64 {
        self.equities + self.fixed_income + self.alternatives + self.cash
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityRegions {
    pub chile: f64,
    pub latam_ex_chile: f64,
    pub usa: f64,
    pub europe: f64,
    pub asia_dev: f64,
    pub emergentes: f64,
}

impl EquityRegions {
    /// Proportions in block catalogue order (`EQUITY_BLOCKS`).
    pub fn shares(&self) -> [f64; 6] {
        [
            self.chile,
            self.latam_ex_chile,
            self.usa,
            self.europe,
            self.asia_dev,
            self.emergentes,
        ]
    }

    pub fn total(&self) -> f64 {
        self.shares().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedIncomeBuckets {
    pub local_short: f64,
    pub local_long: f64,
    #[serde(rename = "globalIG")]
    pub global_ig: f64,
    #[serde(rename = "globalHY")]
    pub global_hy: f64,
    pub inflation_linked: f64,
}

impl FixedIncomeBuckets {
    /// Proportions in block catalogue order (`FIXED_INCOME_BLOCKS`).
    pub fn shares(&self) -> [f64; 5] {
        [
            self.local_short,
            self.local_long,
            self.global_ig,
            self.global_hy,
            self.inflation_linked,
        ]
    }

    pub fn total(&self) -> f64 {
        self.shares().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeBuckets {
    pub real_estate: f64,
    pub infrastructure: f64,
    pub others: f64,
}

impl AlternativeBuckets {
    /// Proportions in block catalogue order (`ALTERNATIVE_BLOCKS`).
    pub fn shares(&self) -> [f64; 3] {
        [self.real_estate, self.infrastructure, self.others]
    }

    pub fn total(&self) -> f64 {
        self.shares().iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub band: RiskBand,
    pub weights: ClassWeights,
    pub equity_regions: EquityRegions,
    pub fixed_income_buckets: FixedIncomeBuckets,
    pub alternative_buckets: AlternativeBuckets,
}
