//! Strategic allocation tables and the score -> benchmark lookup.

use crate::domain::allocation::{
    AlternativeBuckets, AssetAllocation, ClassWeights, EquityRegions, FixedIncomeBuckets, RiskBand,
    Universe,
};

/// Half-open upper score bounds per band; at or above the last bound is agresivo.
const BAND_CUTOFFS: [(f64, RiskBand); 3] = [
    (30.0, RiskBand::Defensivo),
    (55.0, RiskBand::Moderado),
    (80.0, RiskBand::Crecimiento),
];
const TOP_BAND: RiskBand = RiskBand::Agresivo;

// equities / fixed income / alternatives / cash; each row sums to 100.
const RISK_BAND_WEIGHTS: [(RiskBand, ClassWeights); 4] = [
    (RiskBand::Defensivo, class_weights(25.0, 60.0, 10.0, 5.0)),
    (RiskBand::Moderado, class_weights(45.0, 45.0, 10.0, 0.0)),
    (RiskBand::Crecimiento, class_weights(65.0, 25.0, 10.0, 0.0)),
    (RiskBand::Agresivo, class_weights(85.0, 10.0, 5.0, 0.0)),
];

/// ACWI-like with a small LatAm home bias.
pub const EQUITY_REGIONS_GLOBAL: EquityRegions = EquityRegions {
    chile: 5.0,
    latam_ex_chile: 5.0,
    usa: 55.0,
    europe: 15.0,
    asia_dev: 10.0,
    emergentes: 10.0,
};

pub const EQUITY_REGIONS_SOLO_CHILE: EquityRegions = EquityRegions {
    chile: 60.0,
    latam_ex_chile: 10.0,
    usa: 15.0,
    europe: 7.5,
    asia_dev: 2.5,
    emergentes: 5.0,
};

pub const FI_BUCKETS_GLOBAL: FixedIncomeBuckets = FixedIncomeBuckets {
    local_short: 20.0,
    local_long: 20.0,
    global_ig: 40.0,
    global_hy: 10.0,
    inflation_linked: 10.0,
};

pub const FI_BUCKETS_SOLO_CHILE: FixedIncomeBuckets = FixedIncomeBuckets {
    local_short: 40.0,
    local_long: 40.0,
    global_ig: 15.0,
    global_hy: 0.0,
    inflation_linked: 5.0,
};

/// Same split for every universe, kept even when alternatives weigh 0.
pub const ALT_BUCKETS_BASE: AlternativeBuckets = AlternativeBuckets {
    real_estate: 40.0,
    infrastructure: 40.0,
    others: 20.0,
};

const fn class_weights(
    equities: f64,
    fixed_income: f64,
    alternatives: f64,
    cash: f64,
) -> ClassWeights {
    ClassWeights {
        equities,
        fixed_income,
        alternatives,
        cash,
    }
}

/// A missing (or non-finite) score is treated as 0, i.e. defensivo.
pub fn risk_band_from_score(score: Option<f64>) -> RiskBand {
    let s = score.filter(|s| s.is_finite()).unwrap_or(0.0);
    BAND_CUTOFFS
        .iter()
        .find(|(upper, _)| s < *upper)
        .map(|(_, band)| *band)
        .unwrap_or(TOP_BAND)
}

pub fn base_weights(band: RiskBand) -> ClassWeights {
    // Rows are ordered like the enum.
    RISK_BAND_WEIGHTS[band as usize].1
}

pub fn equity_regions(universe: Universe) -> EquityRegions {
    match universe {
        Universe::Global => EQUITY_REGIONS_GLOBAL,
        Universe::SoloChile => EQUITY_REGIONS_SOLO_CHILE,
    }
}

pub fn fixed_income_buckets(universe: Universe) -> FixedIncomeBuckets {
    match universe {
        Universe::Global => FI_BUCKETS_GLOBAL,
        Universe::SoloChile => FI_BUCKETS_SOLO_CHILE,
    }
}

/// Strategic allocation for a risk score.
///
/// Without alternatives, the alternatives weight is folded into equities (never into
/// fixed income or cash). Region and bucket tables depend only on `universe`.
pub fn allocate(score: Option<f64>, include_alternatives: bool, universe: Universe) -> AssetAllocation {
    let band = risk_band_from_score(score);
    let mut weights = base_weights(band);

    if !include_alternatives {
        weights.equities += weights.alternatives;
        weights.alternatives = 0.0;
    }

    tracing::debug!(
        ?score,
        %band,
        %universe,
        include_alternatives,
        equities = weights.equities,
        fixed_income = weights.fixed_income,
        "resolved strategic allocation"
    );

    AssetAllocation {
        band,
        weights,
        equity_regions: equity_regions(universe),
        fixed_income_buckets: fixed_income_buckets(universe),
        alternative_buckets: ALT_BUCKETS_BASE,
    }
}
