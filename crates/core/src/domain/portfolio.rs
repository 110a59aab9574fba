use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A position as read from an account statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub fund_name: String,
    #[serde(default)]
    pub security_id: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub cost_basis: f64,
    #[serde(default)]
    pub market_price: f64,
    pub market_value: f64,
    #[serde(default)]
    pub unrealized_gain_loss: f64,
}

impl Holding {
    pub fn new(fund_name: impl Into<String>, market_value: f64) -> Self {
        Self {
            fund_name: fund_name.into(),
            security_id: String::new(),
            quantity: 0.0,
            unit_cost: 0.0,
            cost_basis: 0.0,
            market_price: 0.0,
            market_value,
            unrealized_gain_loss: 0.0,
        }
    }

    /// Synthetic position standing in for the uninvested cash balance.
    pub fn cash_balance(amount: f64) -> Self {
        Self {
            fund_name: "Cash Balance".to_string(),
            security_id: "CASH".to_string(),
            quantity: 1.0,
            unit_cost: amount,
            cost_basis: amount,
            market_price: amount,
            market_value: amount,
            unrealized_gain_loss: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    Cash,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::Cash => "Cash",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Latin America")]
    LatinAmerica,
    #[serde(rename = "Emerging Markets")]
    EmergingMarkets,
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    Europe,
    Global,
    #[serde(rename = "United States")]
    UnitedStates,
    /// Only used for the synthetic cash position.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::LatinAmerica => "Latin America",
            Region::EmergingMarkets => "Emerging Markets",
            Region::AsiaPacific => "Asia Pacific",
            Region::Europe => "Europe",
            Region::Global => "Global",
            Region::UnitedStates => "United States",
            Region::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    pub asset_class: AssetClass,
    pub region: Region,
    pub percent_of_portfolio: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Exposure {
    pub value: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioComposition {
    /// Sum of holdings' market value plus the cash balance.
    pub total_value: f64,
    pub holdings: Vec<ClassifiedHolding>,
    pub by_asset_class: BTreeMap<AssetClass, Exposure>,
    pub by_region: BTreeMap<Region, Exposure>,
}
