//! Benchmark blocks and their absolute (portfolio-level) weights.
//!
//! `AssetAllocation` region/bucket tables are proportions within a class. Everything
//! downstream (tilts, commentary) works on absolute portfolio percentages, so the
//! conversion lives here and only here: see [`absolute_weights`].

use crate::domain::allocation::{AssetAllocation, Universe};
use crate::domain::comparison::BlockClass;
use crate::risk::benchmarks::allocate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub asset_class: BlockClass,
}

const fn block(id: &'static str, label: &'static str, asset_class: BlockClass) -> BlockDefinition {
    BlockDefinition {
        id,
        label,
        asset_class,
    }
}

/// Same order as `EquityRegions::shares`.
pub const EQUITY_BLOCKS: [BlockDefinition; 6] = [
    block("equity_chile", "Acciones Chile", BlockClass::Equity),
    block("equity_latam_ex_chile", "Acciones LatAm ex Chile", BlockClass::Equity),
    block("equity_usa", "Acciones USA", BlockClass::Equity),
    block("equity_europe", "Acciones Europa", BlockClass::Equity),
    block("equity_asia_dev", "Acciones Asia desarrollada", BlockClass::Equity),
    block("equity_emergentes", "Acciones mercados emergentes", BlockClass::Equity),
];

/// Same order as `FixedIncomeBuckets::shares`.
pub const FIXED_INCOME_BLOCKS: [BlockDefinition; 5] = [
    block("fi_chile_short", "Renta fija Chile corto plazo", BlockClass::FixedIncome),
    block("fi_chile_long", "Renta fija Chile largo plazo", BlockClass::FixedIncome),
    block("fi_global_ig", "Renta fija global IG", BlockClass::FixedIncome),
    block("fi_global_hy", "High Yield global", BlockClass::FixedIncome),
    block("fi_inflation_linked", "Bonos ligados a inflación", BlockClass::FixedIncome),
];

/// Same order as `AlternativeBuckets::shares`.
pub const ALTERNATIVE_BLOCKS: [BlockDefinition; 3] = [
    block("alt_real_estate", "Real estate listado", BlockClass::Alternatives),
    block("alt_infrastructure", "Infraestructura", BlockClass::Alternatives),
    block("alt_others", "Otros alternativos", BlockClass::Alternatives),
];

pub fn all_blocks() -> impl Iterator<Item = &'static BlockDefinition> {
    EQUITY_BLOCKS
        .iter()
        .chain(FIXED_INCOME_BLOCKS.iter())
        .chain(ALTERNATIVE_BLOCKS.iter())
}

pub fn find_block(id: &str) -> Option<&'static BlockDefinition> {
    all_blocks().find(|b| b.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockWeight {
    #[serde(flatten)]
    pub block: BlockDefinition,
    /// Absolute portfolio percent.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkWeights {
    pub allocation: AssetAllocation,
    pub equity: Vec<BlockWeight>,
    pub fixed_income: Vec<BlockWeight>,
    /// All 0 when alternatives are excluded; the blocks stay so model weights on them
    /// still show up as tilts.
    pub alternatives: Vec<BlockWeight>,
}

impl BenchmarkWeights {
    /// Blocks in catalogue order: equity, fixed income, alternatives.
    pub fn blocks(&self) -> impl Iterator<Item = &BlockWeight> {
        self.equity
            .iter()
            .chain(self.fixed_income.iter())
            .chain(self.alternatives.iter())
    }

    pub fn weight_of(&self, id: &str) -> Option<f64> {
        self.blocks().find(|b| b.block.id == id).map(|b| b.weight)
    }

    pub fn total(&self) -> f64 {
        self.blocks().map(|b| b.weight).sum()
    }
}

/// Converts within-class proportions (summing to 100) into absolute portfolio
/// percentages: `proportion * parent_weight / 100`.
pub fn absolute_weights<const N: usize>(proportions: [f64; N], parent_weight: f64) -> [f64; N] {
    let factor = parent_weight / 100.0;
    proportions.map(|p| p * factor)
}

fn zip_blocks<const N: usize>(blocks: &[BlockDefinition; N], weights: [f64; N]) -> Vec<BlockWeight> {
    blocks
        .iter()
        .zip(weights)
        .map(|(block, weight)| BlockWeight {
            block: *block,
            weight,
        })
        .collect()
}

pub fn from_allocation(allocation: AssetAllocation) -> BenchmarkWeights {
    let w = allocation.weights;
    let equity = zip_blocks(
        &EQUITY_BLOCKS,
        absolute_weights(allocation.equity_regions.shares(), w.equities),
    );
    let fixed_income = zip_blocks(
        &FIXED_INCOME_BLOCKS,
        absolute_weights(allocation.fixed_income_buckets.shares(), w.fixed_income),
    );
    // Excluded alternatives were folded into equities, so `w.alternatives` is 0 here.
    let alternatives = zip_blocks(
        &ALTERNATIVE_BLOCKS,
        absolute_weights(allocation.alternative_buckets.shares(), w.alternatives),
    );

    BenchmarkWeights {
        allocation,
        equity,
        fixed_income,
        alternatives,
    }
}

pub fn benchmark_weights(
    score: Option<f64>,
    include_alternatives: bool,
    universe: Universe,
) -> BenchmarkWeights {
    from_allocation(allocate(score, include_alternatives, universe))
}
