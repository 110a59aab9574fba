use serde::{Deserialize, Serialize};
use std::fmt;

/// Deviation bucket of a model weight against its benchmark weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltLevel {
    UnderweightStrong,
    Underweight,
    Neutral,
    Overweight,
    OverweightStrong,
}

impl TiltLevel {
    /// Short badge label.
    pub fn label(&self) -> &'static str {
        match self {
            TiltLevel::Neutral => "Neutral",
            TiltLevel::Overweight => "Overweight",
            TiltLevel::OverweightStrong => "Strong Overweight",
            TiltLevel::Underweight => "Underweight",
            TiltLevel::UnderweightStrong => "Strong Underweight",
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, TiltLevel::OverweightStrong | TiltLevel::UnderweightStrong)
    }

    pub fn is_moderate(&self) -> bool {
        matches!(self, TiltLevel::Overweight | TiltLevel::Underweight)
    }

    pub fn is_overweight(&self) -> bool {
        matches!(self, TiltLevel::Overweight | TiltLevel::OverweightStrong)
    }

    pub fn is_underweight(&self) -> bool {
        matches!(self, TiltLevel::Underweight | TiltLevel::UnderweightStrong)
    }
}

impl fmt::Display for TiltLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltInfo {
    pub level: TiltLevel,
    /// model - neutral, in percentage points.
    pub diff: f64,
}

/// Asset-class grouping used by the commentary (Spanish wire names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlockClass {
    #[serde(rename = "Renta variable")]
    Equity,
    #[serde(rename = "Renta fija")]
    FixedIncome,
    #[serde(rename = "Alternativos")]
    Alternatives,
}

impl BlockClass {
    pub fn label(&self) -> &'static str {
        match self {
            BlockClass::Equity => "Renta variable",
            BlockClass::FixedIncome => "Renta fija",
            BlockClass::Alternatives => "Alternativos",
        }
    }
}

impl fmt::Display for BlockClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One benchmark block with its benchmark weight, model weight and tilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedRow {
    pub asset_class: BlockClass,
    pub block_id: String,
    pub label: String,
    pub neutral: f64,
    pub model: f64,
    pub tilt: TiltInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryByAssetClass {
    pub equity: String,
    pub fixed_income: String,
    pub alternatives: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commentary {
    pub full: String,
    pub brief: String,
    pub by_asset_class: CommentaryByAssetClass,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn consolidated_row_uses_spanish_asset_class_names() {
        let row: ConsolidatedRow = serde_json::from_value(json!({
            "assetClass": "Renta fija",
            "blockId": "fi_global_ig",
            "label": "Renta fija global IG",
            "neutral": 18.0,
            "model": 20.0,
            "tilt": { "level": "overweight", "diff": 2.0 },
        }))
        .unwrap();

        assert_eq!(row.asset_class, BlockClass::FixedIncome);
        assert_eq!(row.tilt.level, TiltLevel::Overweight);
    }

    #[test]
    fn tilt_level_groups() {
        assert!(TiltLevel::OverweightStrong.is_strong());
        assert!(TiltLevel::Underweight.is_moderate());
        assert!(!TiltLevel::Neutral.is_overweight());
        assert!(!TiltLevel::Neutral.is_underweight());
        assert_eq!(TiltLevel::UnderweightStrong.label(), "Strong Underweight");
    }
}
