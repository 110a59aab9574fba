use crate::domain::comparison::{ConsolidatedRow, TiltLevel};
use crate::risk::benchmark_weights::BenchmarkWeights;
use crate::risk::tilt::classify_tilt;
use std::collections::BTreeMap;

/// Pairs every benchmark block with the model weight for it and classifies the tilt.
///
/// Rows come out in catalogue order (equity, fixed income, alternatives). A block the
/// model does not mention keeps its benchmark weight, so it reads as neutral. Model
/// ids that are not benchmark blocks are ignored.
pub fn consolidate(
    benchmark: &BenchmarkWeights,
    model_weights: &BTreeMap<String, f64>,
) -> Vec<ConsolidatedRow> {
    for id in model_weights.keys() {
        if benchmark.weight_of(id).is_none() {
            tracing::warn!(block_id = %id, "model weight for a block outside the benchmark; ignored");
        }
    }

    let rows: Vec<ConsolidatedRow> = benchmark
        .blocks()
        .map(|b| {
            let neutral = b.weight;
            let model = model_weights.get(b.block.id).copied().unwrap_or(neutral);
            ConsolidatedRow {
                asset_class: b.block.asset_class,
                block_id: b.block.id.to_string(),
                label: b.block.label.to_string(),
                neutral,
                model,
                tilt: classify_tilt(neutral, model),
            }
        })
        .collect();

    tracing::debug!(
        rows = rows.len(),
        tilted = rows.iter().filter(|r| r.tilt.level != TiltLevel::Neutral).count(),
        "consolidated model against benchmark"
    );

    rows
}
