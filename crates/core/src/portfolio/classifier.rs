//! Keyword classification of statement holdings.
//!
//! Asset class and region are independent classifiers over the fund name; a
//! "Global Aggregate Bond Fund" is Fixed Income *and* Global. Check order matters in
//! both and is part of the contract.

use crate::domain::portfolio::{
    AssetClass, ClassifiedHolding, Exposure, Holding, PortfolioComposition, Region,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const CASH_KEYWORDS: &[&str] = &["cash", "money market", "liquidity"];

const FIXED_INCOME_KEYWORDS: &[&str] = &[
    "bond",
    "fixed income",
    "credit",
    "aggregate",
    "income",
    "debt",
    "treasury",
    "sovereign",
    "high yield",
    "investment grade",
    "short duration",
    "short term",
    "money market",
    "renta fija",
];

const EQUITY_KEYWORDS: &[&str] = &[
    "equity",
    "stock",
    "value",
    "growth",
    "select",
    "dividend",
    "capital appreciation",
    "index",
    "s&p",
    "nasdaq",
    "renta variable",
    "accion",
];

// First match wins.
const REGION_PATTERNS: &[(&str, Region)] = &[
    (r"(?i)latin\s*americ|latam|brazil|mexico|chile|andean", Region::LatinAmerica),
    (r"(?i)emerg|em\b", Region::EmergingMarkets),
    (r"(?i)asia|asian|pacific|china|japan|india", Region::AsiaPacific),
    (r"(?i)europ|euro\b", Region::Europe),
    (r"(?i)global|world|international|intl", Region::Global),
    (r"(?i)u\.?s\.?\b|america|usa|us\s", Region::UnitedStates),
];

fn region_patterns() -> &'static [(Regex, Region)] {
    static PATTERNS: OnceLock<Vec<(Regex, Region)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        REGION_PATTERNS
            .iter()
            .map(|(pattern, region)| {
                (
                    Regex::new(pattern).expect("region pattern must compile"),
                    *region,
                )
            })
            .collect()
    })
}

/// Cash keywords first, then fixed income, then equity; unmatched names are Equity.
pub fn classify_asset_class(fund_name: &str) -> AssetClass {
    let lower = fund_name.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

    if matches_any(CASH_KEYWORDS) {
        return AssetClass::Cash;
    }
    if matches_any(FIXED_INCOME_KEYWORDS) {
        return AssetClass::FixedIncome;
    }
    if matches_any(EQUITY_KEYWORDS) {
        return AssetClass::Equity;
    }
    AssetClass::Equity
}

/// Unmatched names are Global.
pub fn classify_region(fund_name: &str) -> Region {
    region_patterns()
        .iter()
        .find(|(re, _)| re.is_match(fund_name))
        .map(|(_, region)| *region)
        .unwrap_or(Region::Global)
}

/// Classifies every holding and aggregates by asset class and region.
///
/// A positive `cash_balance` becomes one extra Cash / N/A position. When the total
/// value is not positive every percent is reported as 0; callers dividing by
/// `total_value` themselves must guard that case.
pub fn classify(holdings: &[Holding], cash_balance: f64) -> PortfolioComposition {
    let total_from_holdings: f64 = holdings.iter().map(|h| h.market_value).sum();
    let total_value = total_from_holdings + cash_balance;
    let percent_of = |value: f64| {
        if total_value > 0.0 {
            value / total_value * 100.0
        } else {
            0.0
        }
    };

    if total_value <= 0.0 {
        tracing::warn!(
            holdings = holdings.len(),
            total_value,
            "portfolio total is not positive; percentages reported as 0"
        );
    }

    let mut classified: Vec<ClassifiedHolding> = holdings
        .iter()
        .map(|h| ClassifiedHolding {
            holding: h.clone(),
            asset_class: classify_asset_class(&h.fund_name),
            region: classify_region(&h.fund_name),
            percent_of_portfolio: percent_of(h.market_value),
        })
        .collect();

    if cash_balance > 0.0 {
        classified.push(ClassifiedHolding {
            holding: Holding::cash_balance(cash_balance),
            asset_class: AssetClass::Cash,
            region: Region::NotApplicable,
            percent_of_portfolio: percent_of(cash_balance),
        });
    }

    let mut by_asset_class: BTreeMap<AssetClass, Exposure> = BTreeMap::new();
    let mut by_region: BTreeMap<Region, Exposure> = BTreeMap::new();
    for h in &classified {
        by_asset_class.entry(h.asset_class).or_default().value += h.holding.market_value;
        by_region.entry(h.region).or_default().value += h.holding.market_value;
    }
    for exposure in by_asset_class.values_mut().chain(by_region.values_mut()) {
        exposure.percent = percent_of(exposure.value);
    }

    tracing::debug!(
        holdings = classified.len(),
        total_value,
        asset_classes = by_asset_class.len(),
        regions = by_region.len(),
        "classified portfolio"
    );

    PortfolioComposition {
        total_value,
        holdings: classified,
        by_asset_class,
        by_region,
    }
}
